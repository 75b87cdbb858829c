use serde::Serialize;
use ttd_dataset::Symbol;

use crate::resolve::Resolution;

/// Root of the TempleOS documentation mirror every link points into
pub const DOCS_BASE_URL: &str = "https://templeos.holyc.xyz/Wb";

/// Field title used for every lookup failure
pub const ERROR_TITLE: &str = "[Error]";

const FILE_TYPES: &[(&str, &str)] = &[
    ("HC", "HolyC"),
    ("TXT", "Text"),
    ("GRA", "Graphics"),
    ("BMP", "Windows Bitmap"),
    ("DD", "DolDoc"),
    ("IN", "Input"),
    ("BIN", "Binary"),
    ("CPP", "C++"),
];

/// One titled block of an embed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    /// Layout hint for the chat client; references are always laid out full width
    pub inline: bool,
}

impl EmbedField {
    fn block(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }
}

/// Fields for one reply, in the order their tokens appeared
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reply {
    fields: Vec<EmbedField>,
}

impl Reply {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the field describing `resolution`
    pub fn push(&mut self, resolution: &Resolution<'_>) {
        self.fields.push(EmbedField::from(resolution));
    }

    #[must_use]
    pub fn fields(&self) -> &[EmbedField] {
        &self.fields
    }

    #[must_use]
    pub fn into_fields(self) -> Vec<EmbedField> {
        self.fields
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<&Resolution<'_>> for EmbedField {
    fn from(resolution: &Resolution<'_>) -> Self {
        match resolution {
            Resolution::SymbolFound(symbol) => symbol_field(symbol),
            Resolution::PathFound(path) => path_field(path),
            Resolution::InvalidPath(token) => {
                EmbedField::block(ERROR_TITLE, format!("Invalid path: {token}"))
            }
            Resolution::PathNotFound(token) => {
                EmbedField::block(ERROR_TITLE, format!("Path not found: ::{token}"))
            }
            Resolution::SymbolNotFound(token) => {
                EmbedField::block(ERROR_TITLE, format!("Symbol not found: {token}"))
            }
        }
    }
}

/// Display name for a file extension; unknown extensions are shown as-is.
#[must_use]
pub fn file_type_label(extension: &str) -> &str {
    FILE_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map_or(extension, |(_, label)| *label)
}

fn symbol_field(symbol: &Symbol) -> EmbedField {
    let definition = match &symbol.definition {
        None => "N/A".to_string(),
        Some(def) => {
            let url = format!(
                "{DOCS_BASE_URL}{}#l{}",
                html_page(strip_drive(&def.file)),
                def.line
            );
            format!("[{}, line {}]({url})", def.file, def.line)
        }
    };

    EmbedField::block(
        symbol.symbol.as_str(),
        format!("Type: {}\nDefinition: {definition}", symbol.kind),
    )
}

fn path_field(path: &str) -> EmbedField {
    let (url_path, file_type) = match path.split_once('.') {
        None => (path.to_string(), "Directory".to_string()),
        Some((stem, rest)) => {
            let extension = rest.split_once('.').map_or(rest, |(ext, _)| ext);
            let mut file_type = file_type_label(extension).to_string();
            if path.rsplit_once('.').is_some_and(|(_, last)| last == "Z") {
                file_type.push_str(" (Compressed)");
            }
            (format!("{stem}.html"), file_type)
        }
    };

    let title = path
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or("/");

    EmbedField::block(
        title,
        format!("Type: {file_type}\nPath: [::{path}]({DOCS_BASE_URL}{url_path})"),
    )
}

/// Drop the two-character drive prefix (`C:`)
fn strip_drive(file: &str) -> &str {
    file.char_indices()
        .nth(2)
        .map_or("", |(offset, _)| &file[offset..])
}

/// Source file path to the matching page on the documentation mirror
fn html_page(path: &str) -> String {
    match path.split_once('.') {
        Some((stem, _)) => format!("{stem}.html"),
        None => path.to_string(),
    }
}
