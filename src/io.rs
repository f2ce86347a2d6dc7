use serde::Serialize;
use toml_edit::visit_mut::{self, VisitMut};

use crate::args::Format;

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    TomlEdit(toml_edit::TomlError),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Serialization/Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::TomlEdit(error) => write!(f, "- TOML Parse Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Custom verbose IO error struct.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n- {}", file, self.cause),
            None => write!(f, "- {}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Read from string with verbose errors
pub fn read_to_string(path: &str) -> IoResult<String> {
    match std::fs::read_to_string(path) {
        Ok(buffer) => Ok(buffer),
        Err(error) => Err(IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)}),
    }
}

/// Read in cfg files from the supported filetypes.
/// The filetype is taken from the extension, see `parse_cfg_str`.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    log::debug!("Reading config file {}", path);
    let filetype = path.split('.').last().unwrap_or_default();
    if !CFG_FILETYPES.contains(&filetype) {
        let error_string = format!("Unsupported filetype for config file: {}\nSupported filetypes: {:?}", path, CFG_FILETYPES);
        return Err(IoError{file: Some(path.to_string()), cause: IoErrorType::StringOnly(error_string)});
    }
    let buffer = read_to_string(path)?;
    parse_cfg_str(&buffer, filetype)
        .map_err(|cause| IoError{file: Some(path.to_string()), cause})
}

/// Config filetypes understood by `read_cfg_file`.
pub const CFG_FILETYPES: [&str; 4] = ["json", "toml", "yaml", "yml"];

/// Parse cfg text of one of the `CFG_FILETYPES`.
///
/// Numbers reach the deserializer as their literal text, never through `f64`:
/// YAML scalars already do when a string is requested, while JSON numbers and
/// TOML floats are rewritten as strings before deserializing.
pub fn parse_cfg_str<T>(text: &str, filetype: &str) -> std::result::Result<T, IoErrorType>
where T: serde::de::DeserializeOwned
{
    match filetype {
        "json" => {
            let mut value: serde_json::Value = serde_json::from_str(text)
                .map_err(IoErrorType::SerdeJson)?;
            json_numbers_to_text(&mut value);
            serde_json::from_value(value).map_err(IoErrorType::SerdeJson)
        },
        "toml" => {
            let mut document: toml_edit::DocumentMut = text.parse()
                .map_err(IoErrorType::TomlEdit)?;
            TomlFloatsToText.visit_document_mut(&mut document);
            toml::from_str(&document.to_string()).map_err(IoErrorType::TomlDe)
        },
        "yaml" | "yml" => serde_yaml::from_str(text).map_err(IoErrorType::SerdeYaml),
        _ => Err(IoErrorType::StringOnly(format!("Unsupported config filetype: {}", filetype))),
    }
}

/// Replace every JSON number with its literal text.
/// Needs serde_json's `arbitrary_precision` to keep the text as written.
fn json_numbers_to_text(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Number(number) => {
            let text = number.to_string();
            *value = serde_json::Value::String(text);
        },
        serde_json::Value::Array(items) => items.iter_mut().for_each(json_numbers_to_text),
        serde_json::Value::Object(map) => map.values_mut().for_each(json_numbers_to_text),
        _ => {},
    }
}

/// Replace every TOML float with its literal text, digit separators dropped.
struct TomlFloatsToText;
impl VisitMut for TomlFloatsToText {
    fn visit_value_mut(&mut self, node: &mut toml_edit::Value) {
        if let toml_edit::Value::Float(float) = node {
            let text = float.display_repr().replace('_', "");
            let decor = float.decor().clone();
            let mut replacement = toml_edit::Value::from(text);
            *replacement.decor_mut() = decor;
            *node = replacement;
            return;
        }
        visit_mut::visit_value_mut(self, node);
    }
}

/// Serialize a value in one of the structured formats.
/// `Format::Text` has no generic serialization and is rejected here.
pub fn to_format_string<T>(value: &T, format: &Format) -> IoResult<String>
where T: Serialize
{
    let serialized = match format {
        Format::Yaml => serde_yaml::to_string(value)
            .map_err(|error| IoErrorType::SerdeYaml(error)),
        Format::Json => serde_json::to_string_pretty(value)
            .map_err(|error| IoErrorType::SerdeJson(error)),
        Format::Toml => toml::to_string_pretty(value)
            .map_err(|error| IoErrorType::TomlSer(error)),
        Format::Text => Err(IoErrorType::StringOnly("Text output has no serialized form".to_string())),
    };
    serialized.map_err(|cause| IoError{file: None, cause})
}
