//! Generator orchestrating acquisition, digests, mixing and range mapping.
//!
//! Each call acquires fresh bytes from the injected [`ByteSource`], computes
//! both digests, folds them with [`mix`] and maps the resulting integer into
//! the requested [`Range`]. Nothing is cached between calls.

use num_bigint::BigUint;

use crate::digest::{DigestInput, Digests};
use crate::error::{Error, Result};
use crate::mixer::{mix, MixedBits};
use crate::range::Range;
use crate::source::byte_source::ByteSource;

/// Full trace of one derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    /// MD5 and SHA-256 of the digest input.
    pub digests: Digests,
    /// Folded 256-bit sequence.
    pub mixed: MixedBits,
    /// `mixed` read as an unsigned integer.
    pub raw: BigUint,
    /// `raw` mapped into the requested range.
    pub value: BigUint,
}

/// Derives a value from `bytes` without any I/O.
///
/// # Errors
/// - [`Error::InvalidRange`] if `range` has `min > max`, checked first.
/// - [`Error::SourceUnavailable`] if `bytes` is empty.
/// - [`Error::HashFailure`] if a hash primitive misbehaves.
///
/// # Examples
///
/// ```
/// use imgrand::{derive, DigestInput, Range};
///
/// let range = Range::bounded(1u32, 6u32).unwrap();
/// let d = derive(b"imgrand", DigestInput::Raw, &range).unwrap();
/// assert!(range.contains(&d.value));
/// ```
pub fn derive(bytes: &[u8], input: DigestInput, range: &Range) -> Result<Derivation> {
    range.validate()?;
    if bytes.is_empty() {
        return Err(Error::SourceUnavailable("source returned no bytes".into()));
    }
    let digests = Digests::compute(bytes, input)?;
    let mixed = mix(&digests.long, &digests.short);
    tracing::debug!(mixed = %mixed, "mixed digests");
    let raw = mixed.to_biguint();
    let value = range.map(raw.clone())?;
    Ok(Derivation {
        digests,
        mixed,
        raw,
        value,
    })
}

/// Generates integers from a [`ByteSource`].
///
/// # Examples
///
/// ```
/// use imgrand::source::fixed::FixedSource;
/// use imgrand::ImageRandom;
/// use num_bigint::BigUint;
///
/// let mut rng = ImageRandom::new(FixedSource::new(b"some image bytes".to_vec()));
/// let n = rng.generate_between(1u32, 100u32).unwrap();
/// assert!(n >= BigUint::from(1u32) && n <= BigUint::from(100u32));
/// ```
pub struct ImageRandom<S> {
    source: S,
    input: DigestInput,
}

impl<S: ByteSource> ImageRandom<S> {
    /// Creates a generator hashing raw source bytes.
    pub fn new(source: S) -> Self {
        ImageRandom {
            source,
            input: DigestInput::Raw,
        }
    }

    /// Selects the digest input mode.
    pub fn with_digest_input(mut self, input: DigestInput) -> Self {
        self.input = input;
        self
    }

    /// Returns the digest input mode.
    pub fn digest_input(&self) -> DigestInput {
        self.input
    }

    /// Returns a reference to the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the generator, returning the source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Acquires fresh bytes and returns the full derivation trace.
    ///
    /// The range is validated before the source is touched.
    ///
    /// # Errors
    /// Propagates range, source and hash errors unchanged.
    #[tracing::instrument(level = "debug", skip(self), fields(input = ?self.input))]
    pub fn derive_next(&mut self, range: &Range) -> Result<Derivation> {
        range.validate()?;
        let bytes = self.source.fetch_bytes()?;
        tracing::debug!(len = bytes.len(), "acquired source bytes");
        derive(&bytes, self.input, range)
    }

    /// Generates a value in `range`.
    ///
    /// # Errors
    /// Propagates range, source and hash errors unchanged.
    pub fn generate(&mut self, range: &Range) -> Result<BigUint> {
        Ok(self.derive_next(range)?.value)
    }

    /// Generates a value in `[0, 2^256 - 1]`.
    ///
    /// # Errors
    /// Propagates source and hash errors unchanged.
    pub fn generate_unbounded(&mut self) -> Result<BigUint> {
        self.generate(&Range::Unbounded)
    }

    /// Generates a value in `[min, max]`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] before fetching if `min > max`.
    pub fn generate_between<T: Into<BigUint>>(&mut self, min: T, max: T) -> Result<BigUint> {
        let range = Range::bounded(min, max)?;
        self.generate(&range)
    }
}

/// Generates one value from `source` with optional bounds.
///
/// `(None, None)` is unbounded, `(None, Some(max))` is `[0, max]` and a
/// minimum without a maximum is rejected.
///
/// # Errors
/// Returns range errors before touching `source`, then propagates source and
/// hash errors unchanged.
pub fn generate<S: ByteSource>(
    source: S,
    min: Option<BigUint>,
    max: Option<BigUint>,
) -> Result<BigUint> {
    let range = Range::from_bounds(min, max)?;
    ImageRandom::new(source).generate(&range)
}
