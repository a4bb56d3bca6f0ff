//! Cause, unwrap, is and find across mixed chains

mod common;

use common::{CustomErr, NativeWrap, Sentinel};
use errstack::{causer, chain, Causer, Error, ResultExt};
use std::error::Error as StdError;
use std::fmt;
use std::io;

/// Exposes its cause through the legacy accessor only
#[derive(Debug)]
struct LegacyWrap {
    inner: Box<dyn StdError + Send + Sync>,
}

impl fmt::Display for LegacyWrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "legacy: {}", self.inner)
    }
}

impl StdError for LegacyWrap {}

impl Causer for LegacyWrap {
    fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.inner.as_ref())
    }
}

/// Implements the legacy accessor but is never registered
#[derive(Debug)]
struct UnregisteredWrap {
    inner: Box<dyn StdError + Send + Sync>,
}

impl fmt::Display for UnregisteredWrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unregistered: {}", self.inner)
    }
}

impl StdError for UnregisteredWrap {}

impl Causer for UnregisteredWrap {
    fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.inner.as_ref())
    }
}

fn eof() -> io::Error {
    io::Error::other("EOF")
}

#[test]
fn test_cause_of_plain_error_is_itself() {
    common::init_logging();

    let err = eof();
    let root = chain::cause(&err);
    assert!(root.downcast_ref::<io::Error>().is_some());
    assert_eq!(root.to_string(), "EOF");
}

#[test]
fn test_cause_peels_every_own_layer() {
    let cases: Vec<Error> = vec![
        Error::wrap(eof(), "ignored"),
        Error::with_stack(eof()),
        Error::with_message(eof(), "whoops"),
        Error::wrap(Error::wrap(eof(), "inner"), "outer"),
        Error::with_message(Error::with_stack(eof()), "outer"),
    ];

    for err in cases {
        let root = chain::cause(&err);
        assert!(root.downcast_ref::<io::Error>().is_some(), "root of {err}");
    }
}

#[test]
fn test_cause_of_leaf_is_the_leaf() {
    let leaf = Error::new("ooh");
    let err = Error::wrap(Error::with_stack(leaf.clone()), "ahh");

    let root = err.root_cause().downcast_ref::<Error>().expect("root is ours");
    assert_eq!(root, &leaf);
    assert_eq!(chain::cause(&leaf).downcast_ref::<Error>(), Some(&leaf));
}

#[test]
fn test_cause_stops_at_source_only_links() {
    let err = Error::wrap(NativeWrap::new(Sentinel), "outer");

    let root = chain::cause(&err);
    assert!(root.downcast_ref::<NativeWrap>().is_some());
    assert_eq!(root.to_string(), "wrap it: sentinel");
}

#[test]
fn test_cause_follows_registered_legacy_types() {
    causer::register::<LegacyWrap>();
    assert!(causer::is_registered::<LegacyWrap>());

    let err = Error::wrap(
        LegacyWrap {
            inner: Box::new(Sentinel),
        },
        "outer",
    );
    assert_eq!(err.to_string(), "outer: legacy: sentinel");
    assert!(chain::cause(&err).downcast_ref::<Sentinel>().is_some());

    let unregistered = Error::wrap(
        UnregisteredWrap {
            inner: Box::new(Sentinel),
        },
        "outer",
    );
    assert!(!causer::is_registered::<UnregisteredWrap>());
    assert!(chain::cause(&unregistered)
        .downcast_ref::<UnregisteredWrap>()
        .is_some());
}

#[test]
fn test_unwrap_takes_one_step() {
    let leaf = Error::new("ooh");
    let stacked = Error::with_stack(leaf.clone());

    let next = chain::unwrap(&stacked).and_then(|e| e.downcast_ref::<Error>());
    assert_eq!(next, Some(&leaf));
    assert!(chain::unwrap(&leaf).is_none());

    let plain = eof();
    assert!(chain::unwrap(&plain).is_none());
}

#[test]
fn test_unwrap_of_message_wrapper_is_identity() {
    let inner = Error::new("ooh");
    let err = Error::with_message(inner.clone(), "m");

    let next = chain::unwrap(&err).and_then(|e| e.downcast_ref::<Error>());
    assert!(next.is_some_and(|next| next.ptr_eq(&inner)));
}

#[test]
fn test_unwrap_falls_back_to_source() {
    let native = NativeWrap::new(Sentinel);

    let next = chain::unwrap(&native).expect("source is followed");
    assert_eq!(next.downcast_ref::<Sentinel>(), Some(&Sentinel));
}

#[test]
fn test_unwrap_prefers_legacy_accessor() {
    causer::register::<LegacyWrap>();

    let legacy = LegacyWrap {
        inner: Box::new(CustomErr {
            msg: "legacy".into(),
        }),
    };
    let next = chain::unwrap(&legacy).expect("legacy cause is followed");
    assert_eq!(next.to_string(), "legacy");

    let unregistered = UnregisteredWrap {
        inner: Box::new(Sentinel),
    };
    assert!(chain::unwrap(&unregistered).is_none());
}

#[test]
fn test_is_finds_sentinel_anywhere() {
    let cases: Vec<(Box<dyn StdError + Send + Sync>, bool)> = vec![
        (Box::new(Sentinel), true),
        (Box::new(Error::wrap(Sentinel, "wrapped")), true),
        (Box::new(Error::with_stack(Sentinel)), true),
        (Box::new(Error::with_message(Sentinel, "ctx")), true),
        (Box::new(NativeWrap::new(Sentinel)), true),
        (Box::new(Error::wrap(NativeWrap::new(Sentinel), "outer")), true),
        (Box::new(Error::new("sentinel")), false),
        (Box::new(eof()), false),
    ];

    for (err, want) in cases {
        let err: &(dyn StdError + 'static) = err.as_ref();
        assert_eq!(chain::is(err, &Sentinel), want, "is({err}, Sentinel)");
    }
}

#[test]
fn test_is_compares_own_errors_by_identity() {
    let target = Error::new("target");
    let lookalike = Error::new("target");
    let err = Error::wrap(Error::with_stack(target.clone()), "outer");

    assert!(err.is(&target));
    assert!(!err.is(&lookalike));
    assert!(err.is(&err.clone()));
}

#[test]
fn test_find_extracts_first_match() {
    let custom = CustomErr {
        msg: "custom error".into(),
    };
    let err = Error::wrap(Error::with_message(custom.clone(), "ctx"), "outer");

    assert_eq!(err.find::<CustomErr>(), Some(&custom));
    assert!(err.find::<io::Error>().is_none());

    let own = chain::find::<Error>(&err).expect("outermost link is ours");
    assert!(own.ptr_eq(&err));
}

#[test]
fn test_find_into_copies_the_match() {
    let err = Error::wrap(
        NativeWrap::new(CustomErr {
            msg: "custom error".into(),
        }),
        "outer",
    );

    let mut target = CustomErr::default();
    assert!(chain::find_into(&err, &mut target));
    assert_eq!(target.msg, "custom error");

    let stacked = Error::with_stack(CustomErr { msg: "m".into() });
    let mut target = CustomErr::default();
    assert!(chain::find_into(&stacked, &mut target));
    assert_eq!(target, CustomErr { msg: "m".into() });

    let mut untouched = CustomErr {
        msg: "keep".into(),
    };
    assert!(!chain::find_into(&Error::new("ooh"), &mut untouched));
    assert_eq!(untouched.msg, "keep");
}

#[test]
fn test_chain_yields_every_link() {
    let err = Error::wrap(NativeWrap::new(Sentinel), "outer");

    let messages: Vec<String> = err.chain().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "outer: wrap it: sentinel",
            "wrap it: sentinel",
            "wrap it: sentinel",
            "sentinel",
        ]
    );

    let mut links = err.chain();
    while links.next().is_some() {}
    assert!(links.next().is_none());
}

#[test]
fn test_walkers_accept_anyhow_errors() {
    let source: Result<(), Sentinel> = Err(Sentinel);
    let wrapped = source.wrap("from errstack");
    let any = anyhow::Error::from(wrapped.expect_err("error")).context("from anyhow");

    let dyn_err: &(dyn StdError + 'static) = any.as_ref();
    assert!(chain::is(dyn_err, &Sentinel));
    assert!(chain::find::<Error>(dyn_err).is_some());
    assert_eq!(any.to_string(), "from anyhow");
}
