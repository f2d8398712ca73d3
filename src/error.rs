use core::any::Any;

/// What a boxed source error looks like, both inside [`Error`] and as a panic payload.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// There is but one – failure, and it has a message.
///
/// Whatever a wrapped call unwinds with ends up as one of these,
/// see [`Error::from_panic`] for the coercion rules.
///
/// Two errors compare equal when they read the same: equal messages,
/// and sources (if any) with equal messages.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    message: String,
    #[source]
    source: Option<BoxError>,
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// An error that is nothing but its message.
    pub fn msg(message: impl Into<String>) -> Self {
        Error { message: message.into(), source: None }
    }

    /// Wraps some other error; its `Display` becomes the message.
    pub fn new<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error { message: source.to_string(), source: Some(Box::new(source)) }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped source, if it is an `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.source.as_ref()?.downcast_ref::<E>()
    }

    /// Normalizes a panic payload.
    ///
    /// - an [`Error`] (see [`throw`]) is returned as is
    /// - a [`BoxError`] becomes the source, its `Display` the message
    /// - so do the standard library's own errors (`io::Error`, `fmt::Error`,
    ///   the `Parse*Error`s, `Utf8Error`, `FromUtf8Error`, `TryFromIntError`)
    /// - `&str` and `String` (i.e., `panic!("...")`) become the message
    /// - primitives (`bool`, `char`, integers, floats) are formatted
    /// - anything else reads `Box<dyn Any>`, like the standard panic reporter
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Error>() {
            Ok(error) => return *error,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<BoxError>() {
            Ok(source) => return Error::from(*source),
            Err(payload) => payload,
        };

        macro_rules! wrap_source {
            ($payload:ident: $($ty:ty),*) => {
                $(
                    let $payload = match $payload.downcast::<$ty>() {
                        Ok(source) => return Error::new(*source),
                        Err(payload) => payload,
                    };
                )*
            };
        }
        wrap_source!(payload:
            std::io::Error,
            core::fmt::Error,
            core::num::ParseIntError,
            core::num::ParseFloatError,
            core::num::TryFromIntError,
            core::str::ParseBoolError,
            core::char::ParseCharError,
            core::str::Utf8Error,
            std::string::FromUtf8Error,
            std::net::AddrParseError
        );

        let payload = match payload.downcast::<String>() {
            Ok(message) => return Error::msg(*message),
            Err(payload) => payload,
        };
        if let Some(message) = payload.downcast_ref::<&'static str>() {
            return Error::msg(*message);
        }

        macro_rules! display {
            ($($ty:ty),*) => {
                $(
                    if let Some(value) = payload.downcast_ref::<$ty>() {
                        return Error::msg(value.to_string());
                    }
                )*
            };
        }
        display!(
            bool, char,
            i8, i16, i32, i64, i128, isize,
            u8, u16, u32, u64, u128, usize,
            f32, f64
        );

        Error::msg("Box<dyn Any>")
    }
}

/// Normalization at a catch site.
pub(crate) fn unwound(payload: Box<dyn Any + Send>) -> Error {
    let error = Error::from_panic(payload);
    debug!("caught panic: {}", error);
    error
}

/// Raises `error` as a panic payload.
///
/// A wrapper further up the stack hands it back by identity,
/// rather than as the message of a new [`Error`].
///
/// Other errors go through `throw(Error::new(e))`: apart from the standard
/// library's own (see [`Error::from_panic`]), a concrete error type raised with
/// `panic_any` cannot be recognized as an error, and arrives as `Box<dyn Any>`.
pub fn throw(error: impl Into<Error>) -> ! {
    std::panic::panic_any(error.into())
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.source.as_ref().map(|source| source.to_string())
                == other.source.as_ref().map(|source| source.to_string())
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::msg(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::msg(message)
    }
}

impl From<BoxError> for Error {
    fn from(source: BoxError) -> Self {
        // one of ours, boxed up by someone else
        match source.downcast::<Error>() {
            Ok(error) => *error,
            Err(source) => Error { message: source.to_string(), source: Some(source) },
        }
    }
}
