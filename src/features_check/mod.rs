//! Shows a user-friendly compiler error when neither `std` nor `alloc` is
//! enabled. Errors own a copy of the offending literal, so one of the two
//! is always required.

#[allow(unused_macros)]
macro_rules! hide_from_rustfmt {
    ($mod:item) => {
        $mod
    };
}

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
hide_from_rustfmt! {
    mod error;
}
