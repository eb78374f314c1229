use miette::Diagnostic;
use thiserror::Error;

/// Main error type for vecscene operations
#[derive(Error, Diagnostic, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    #[diagnostic(code(vecscene::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(vecscene::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(vecscene::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Markup error: {message}")]
    #[diagnostic(code(vecscene::markup))]
    Markup { message: String },

    #[error("Could not parse style declaration: {piece:?}")]
    #[diagnostic(
        code(vecscene::style::malformed),
        help("Each declaration needs exactly one ':' between key and value")
    )]
    MalformedStyleDeclaration { piece: String },

    #[error("Did not consume all path data ({remaining_token_count} token(s) left): {remaining_content:?}")]
    #[diagnostic(code(vecscene::path::unconsumed))]
    UnconsumedPathData {
        remaining_token_count: usize,
        remaining_content: String,
    },

    #[error("Command '{command}' got {provided_count} argument(s), expected a multiple of {required_arity}")]
    #[diagnostic(code(vecscene::path::incomplete))]
    IncompleteArgumentGroup {
        command: char,
        provided_count: usize,
        required_arity: usize,
    },

    #[error("Unsupported path command '{letter}'")]
    #[diagnostic(
        code(vecscene::path::unsupported),
        help("Horizontal/vertical lines and quadratic curves are not implemented")
    )]
    UnsupportedCommand { letter: char },

    #[error("Unknown shape element: <{tag_name}>")]
    #[diagnostic(code(vecscene::scene::unknown_element))]
    UnknownElement { tag_name: String },

    #[error("Expected a number, found {token:?}")]
    #[diagnostic(code(vecscene::number))]
    NumericParseFailure { token: String },

    #[error("Elements nested deeper than {depth} levels")]
    #[diagnostic(code(vecscene::scene::depth))]
    NestingTooDeep { depth: usize },

    #[error("Error decoding <{tag}>{}", describe_id(.id))]
    #[diagnostic(code(vecscene::scene::element))]
    Element {
        tag: String,
        id: Option<String>,
        #[source]
        source: Box<SceneError>,
    },
}

fn describe_id(id: &Option<String>) -> String {
    match id {
        Some(id) => format!(" id={:?}", id),
        None => String::new(),
    }
}

impl SceneError {
    /// Wrap this error with the element it was raised in.
    pub fn in_element(self, tag: impl Into<String>, id: Option<&str>) -> Self {
        SceneError::Element {
            tag: tag.into(),
            id: id.map(str::to_string),
            source: Box::new(self),
        }
    }

    /// The innermost error, with all element annotations stripped.
    pub fn root_cause(&self) -> &SceneError {
        match self {
            SceneError::Element { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, SceneError>;
