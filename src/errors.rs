//
// Errors
//
use std::io;
use std::result;
use std::error;
use csv;
use std::fmt;

/// Type alias for catawba errors
pub type Result<X> = result::Result<X, Error>;

/// Wrapper for the kinds of errors occuring as part of a counting run
#[derive(Debug)]
pub enum Error {
    CsvError(csv::Error),
    IOError(io::Error),
    MissingFile(&'static str, Option<io::Error>),
    MissingColumn(String),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::CsvError(ref err) => write!(f, "CSV error: {}", err),
            Error::IOError(ref err) => write!(f, "IO error: {}", err),
            Error::MissingFile(ref info, ref opt_err) => {
                write!(f,
                    "The {} must already exist at this point but there was a problem opening it. \
                    Wrong directory? Maybe missed a step? The OS error was: ",
                    info)?;
                if let &Some(ref err) = opt_err { write!(f, "{}", err) }
                else { write!(f, "Unknown") }
            },
            Error::MissingColumn(ref name) => {
                write!(f,
                    "The input table has no column named {}. \
                    Pass --column if the titles live somewhere else.",
                    name)
            },
            Error::Other(ref info) => write!(f, "{}", info),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::CsvError(ref err) => Some(err),
            Error::IOError(ref err) => Some(err),
            Error::MissingFile(_, ref opt_err) => {
                match *opt_err {
                    Some(ref err) => Some(err),
                    None => None,
                }
            },
            Error::MissingColumn(_) => None,
            Error::Other(_) => None,
        }
    }
}
//
// Convert everything else into Error
//
impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::CsvError(err)
    }
}
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IOError(err)
    }
}

//
// Convert Error into a general io Error
//
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::Other, err)
    }
}
