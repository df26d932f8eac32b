//! Integration tests for byte sources and configuration files.

use std::io::Write;

use imgrand::source::byte_source::ByteSource;
use imgrand::source::file::FileSource;
use imgrand::source::fixed::FixedSource;
use imgrand::{derive, Config, DigestInput, Error, ImageRandom, Range};

/// Serves a scripted sequence of payloads, one per fetch.
struct ScriptedSource {
    payloads: Vec<Vec<u8>>,
}

impl ByteSource for ScriptedSource {
    fn fetch_bytes(&mut self) -> imgrand::error::Result<Vec<u8>> {
        if self.payloads.is_empty() {
            return Err(Error::SourceUnavailable("script exhausted".into()));
        }
        Ok(self.payloads.remove(0))
    }
}

#[test]
fn file_source_rereads_on_every_call() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"first image").unwrap();
    file.flush().unwrap();

    let mut rng = ImageRandom::new(FileSource::new(file.path()));
    let first = rng.generate_unbounded().unwrap();

    std::fs::write(file.path(), b"second image").unwrap();
    let second = rng.generate_unbounded().unwrap();

    assert_ne!(first, second);
    assert_eq!(
        second,
        derive(b"second image", DigestInput::Raw, &Range::Unbounded)
            .unwrap()
            .value
    );
}

#[test]
fn empty_file_is_rejected() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut rng = ImageRandom::new(FileSource::new(file.path()));
    assert_eq!(
        rng.generate_unbounded(),
        Err(Error::SourceUnavailable("source returned no bytes".into()))
    );
}

#[test]
fn each_generation_consumes_one_payload() {
    let mut rng = ImageRandom::new(ScriptedSource {
        payloads: vec![b"a".to_vec(), b"b".to_vec()],
    });
    let range = Range::bounded(0u32, 1_000_000u32).unwrap();
    let a = rng.generate(&range).unwrap();
    let b = rng.generate(&range).unwrap();
    assert_eq!(a, derive(b"a", DigestInput::Raw, &range).unwrap().value);
    assert_eq!(b, derive(b"b", DigestInput::Raw, &range).unwrap().value);
    assert!(matches!(
        rng.generate(&range),
        Err(Error::SourceUnavailable(_))
    ));
}

#[test]
fn boxed_sources_are_interchangeable() {
    let sources: Vec<Box<dyn ByteSource>> = vec![
        Box::new(FixedSource::new(b"pixels".to_vec())),
        Box::new(ScriptedSource {
            payloads: vec![b"pixels".to_vec()],
        }),
    ];
    let values: Vec<_> = sources
        .into_iter()
        .map(|s| ImageRandom::new(s).generate_unbounded().unwrap())
        .collect();
    assert_eq!(values[0], values[1]);
}

#[test]
fn config_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "digest_input = \"binary_text\"\n\n[source]\nendpoint = \"https://example.org/cat.jpg\"\ndirect = true\nmax_bytes = 1024"
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.digest_input, DigestInput::BinaryText);
    assert_eq!(config.source.endpoint, "https://example.org/cat.jpg");
    assert_eq!(config.source.image_url_field(), None);
    assert_eq!(config.source.max_bytes, 1024);
}

#[test]
fn invalid_config_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[source]\ntimeout_secs = 0").unwrap();
    assert_eq!(
        Config::load(file.path()),
        Err(Error::InvalidConfig("timeout_secs must be positive".into()))
    );
}
