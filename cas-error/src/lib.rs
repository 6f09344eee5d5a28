//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! An [`Error`] pairs an [`ErrorKind`] with the regions of the source expression it points at.
//! Reports are built with [`ariadne`], and can be rendered either to stderr or, for callers that
//! need to ship the diagnostic elsewhere (such as an HTTP response), into a plain [`String`].

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::{fmt::{self, Debug}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// Implementors only describe the error; the layout of the report is shared by every kind through
/// the provided [`ErrorKind::build_report`] method.
pub trait ErrorKind: Debug + Send + Sync {
    /// The one-line summary of the error.
    fn message(&self) -> String;

    /// One label per span of the [`Error`] this kind belongs to. Empty labels are drawn without a
    /// message.
    fn labels(&self) -> Vec<String> {
        vec![String::from("here")]
    }

    /// An optional hint telling the user how to fix the error.
    fn help(&self) -> Option<String> {
        None
    }

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        assemble_report(self, src_id, spans, true)
    }
}

/// Lays out the report shared by every [`ErrorKind`]: the message, one label per span, and the
/// help text if there is any.
fn assemble_report<'r, 'a, K: ErrorKind + ?Sized>(
    kind: &K,
    src_id: &'a str,
    spans: &[Range<usize>],
    color: bool,
) -> Report<'r, (&'a str, Range<usize>)> {
    let offset = spans.first().map_or(0, |span| span.start);
    let mut builder = Report::build(ReportKind::Error, src_id, offset)
        .with_config(Config::default().with_color(color))
        .with_message(kind.message())
        .with_labels(
            kind.labels()
                .into_iter()
                .zip(spans.iter())
                .map(|(label_str, span)| {
                    let mut label = Label::new((src_id, span.clone()));
                    if color {
                        label = label.with_color(EXPR);
                    }
                    if label_str.is_empty() {
                        label
                    } else {
                        label.with_message(label_str)
                    }
                }),
        );

    if let Some(help) = kind.help() {
        builder.set_help(help);
    }

    builder.finish()
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the one-line summary of the error.
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> std::io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }

    /// Renders the report for this error into a string, without any terminal colors.
    pub fn report_to_string(&self, src_id: &str, input: &str) -> String {
        let mut out = Vec::new();
        match assemble_report(&*self.kind, src_id, &self.spans, false)
            .write((src_id, Source::from(input)), &mut out)
        {
            Ok(()) => String::from_utf8_lossy(&out).into_owned(),
            Err(_) => self.message(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}
