//! Article sharing
//!
//! Sharing goes through a host-provided [`ShareTarget`]. When the host has
//! none, [`share`] fails with [`KhabarError::ShareUnsupported`], which the
//! caller surfaces to the user as a blocking alert.

use std::io::Write;

use tracing::debug;

use crate::article::Article;
use crate::error::{KhabarError, Result};

/// Data handed to the share capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    /// Article headline
    pub title: String,
    /// Article text
    pub text: String,
    /// Url to share; empty if neither the article nor the reader has one
    pub url: String,
}

impl SharePayload {
    /// Build the payload for `article`
    ///
    /// Uses the article's own url, falling back to `reader_url`.
    pub fn for_article(article: &Article, reader_url: Option<&str>) -> Self {
        Self {
            title: article.title.clone(),
            text: article.content.clone(),
            url: article
                .url
                .as_deref()
                .or(reader_url)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// Host capability for sharing content
pub trait ShareTarget {
    /// Hand `payload` to the host
    fn share(&mut self, payload: &SharePayload) -> Result<()>;
}

/// Share target that prints the payload to a writer
#[derive(Debug)]
pub struct WriterShare<W: Write> {
    out: W,
}

impl<W: Write> WriterShare<W> {
    /// Share by writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> WriterShare<W> {
    fn write_payload(&mut self, payload: &SharePayload) -> std::io::Result<()> {
        writeln!(self.out, "{}", payload.title)?;
        if !payload.text.is_empty() {
            writeln!(self.out, "{}", payload.text)?;
        }
        if !payload.url.is_empty() {
            writeln!(self.out, "{}", payload.url)?;
        }
        self.out.flush()
    }
}

impl<W: Write> ShareTarget for WriterShare<W> {
    fn share(&mut self, payload: &SharePayload) -> Result<()> {
        self.write_payload(payload).map_err(|e| KhabarError::Share(e.to_string()))
    }
}

/// Share `article` through `target`, if the host provides one
///
/// # Errors
///
/// - [`KhabarError::ShareUnsupported`] if `target` is `None`
/// - whatever the target returns on failure
pub fn share(
    article: &Article,
    target: Option<&mut dyn ShareTarget>,
    reader_url: Option<&str>,
) -> Result<()> {
    let Some(target) = target else {
        return Err(KhabarError::ShareUnsupported);
    };
    let payload = SharePayload::for_article(article, reader_url);
    debug!("Sharing {}", article.id);
    target.share(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::ArticleBuilder;

    #[test]
    fn test_payload_prefers_article_url() {
        let article = ArticleBuilder::new()
            .title("T")
            .content("C")
            .url("https://news/1")
            .build();
        let payload = SharePayload::for_article(&article, Some("https://reader/"));
        assert_eq!(payload.url, "https://news/1");
        assert_eq!(payload.title, "T");
        assert_eq!(payload.text, "C");
    }

    #[test]
    fn test_payload_falls_back_to_reader_url() {
        let article = ArticleBuilder::new().title("T").build();
        assert_eq!(
            SharePayload::for_article(&article, Some("https://reader/")).url,
            "https://reader/"
        );
        assert_eq!(SharePayload::for_article(&article, None).url, "");
    }

    #[test]
    fn test_unsupported() {
        let article = ArticleBuilder::new().title("T").build();
        let err = share(&article, None, None).unwrap_err();
        assert!(matches!(err, KhabarError::ShareUnsupported));
        assert_eq!(err.to_string(), "Sharing is not supported on this platform");
    }

    #[test]
    fn test_writer_share() {
        let article = ArticleBuilder::new()
            .title("Headline")
            .content("Body")
            .url("https://news/2")
            .build();
        let mut target = WriterShare::new(Vec::new());
        share(&article, Some(&mut target), None).unwrap();
        let written = String::from_utf8(target.into_inner()).unwrap();
        assert_eq!(written, "Headline\nBody\nhttps://news/2\n");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_failure_is_share_error() {
        let article = ArticleBuilder::new().title("T").build();
        let mut target = WriterShare::new(ClosedPipe);
        let err = share(&article, Some(&mut target), None).unwrap_err();
        assert!(matches!(err, KhabarError::Share(_)));
    }
}
