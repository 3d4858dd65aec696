use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ErrorKind {
	FailedToDecode(PathBuf, String),
	FailedToDeserialize(PathBuf),
	FailedToRead(PathBuf),
	FailedToRenderTemplate(String),
	FailedToSerialize(PathBuf),
	FailedToWrite(PathBuf),
	Message(String),
	UnknownEncoding(String),
}

#[derive(Debug)]
pub struct Error {
	pub kind: ErrorKind,
	source: Option<Box<dyn StdError + Sync + Send>>,
}

impl Error {
	pub fn failed_to_decode(
		path: impl Into<PathBuf>,
		encoding: &str,
		source: impl Into<Box<dyn StdError + Send + Sync>>,
	) -> Self {
		Error {
			kind: ErrorKind::FailedToDecode(path.into(), encoding.to_string()),
			source: Some(source.into()),
		}
	}

	pub fn failed_to_deserialize(
		path: impl Into<PathBuf>,
		source: impl Into<Box<dyn StdError + Send + Sync>>,
	) -> Self {
		Error {
			kind: ErrorKind::FailedToDeserialize(path.into()),
			source: Some(source.into()),
		}
	}

	pub fn failed_to_read(path: impl Into<PathBuf>, source: ::std::io::Error) -> Self {
		Error {
			kind: ErrorKind::FailedToRead(path.into()),
			source: Some(source.into()),
		}
	}

	pub fn failed_to_render_template(name: &str, source: tera::Error) -> Self {
		Error {
			kind: ErrorKind::FailedToRenderTemplate(name.to_string()),
			source: Some(source.into()),
		}
	}

	pub fn failed_to_serialize(
		path: impl Into<PathBuf>,
		source: impl Into<Box<dyn StdError + Send + Sync>>,
	) -> Self {
		Error {
			kind: ErrorKind::FailedToSerialize(path.into()),
			source: Some(source.into()),
		}
	}

	pub fn failed_to_write(path: impl Into<PathBuf>, source: ::std::io::Error) -> Self {
		Error {
			kind: ErrorKind::FailedToWrite(path.into()),
			source: Some(source.into()),
		}
	}

	pub fn message(text: impl ToString) -> Self {
		Self {
			kind: ErrorKind::Message(text.to_string()),
			source: None,
		}
	}

	pub fn unknown_encoding(label: &str) -> Self {
		Self {
			kind: ErrorKind::UnknownEncoding(label.to_string()),
			source: None,
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match &self.kind {
			ErrorKind::FailedToDecode(path, encoding) => write!(
				f,
				"Failed to decode '{}' as {}.",
				path.to_string_lossy(),
				encoding,
			),
			ErrorKind::FailedToDeserialize(path) => {
				write!(f, "Failed to deserialize '{}'.", path.to_string_lossy())
			}
			ErrorKind::FailedToRead(path) => {
				write!(f, "Failed to read '{}'.", path.to_string_lossy())
			}
			ErrorKind::FailedToRenderTemplate(name) => {
				write!(f, "Failed to render template '{}'.", name)
			}
			ErrorKind::FailedToSerialize(path) => {
				write!(f, "Failed to serialize '{}'.", path.to_string_lossy())
			}
			ErrorKind::FailedToWrite(path) => {
				write!(f, "Failed to write '{}'.", path.to_string_lossy())
			}
			ErrorKind::Message(message) => write!(f, "{}", message),
			ErrorKind::UnknownEncoding(label) => write!(f, "Unknown encoding '{}'.", label),
		}
	}
}

impl StdError for Error {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		self.source
			.as_ref()
			.map(|c| &**c as &(dyn StdError + 'static))
	}
}

impl From<&str> for Error {
	fn from(text: &str) -> Self {
		Self::message(text)
	}
}

impl From<String> for Error {
	fn from(text: String) -> Self {
		Self::message(text)
	}
}

pub type Result<T> = ::std::result::Result<T, Error>;
