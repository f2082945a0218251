use std::io;

/// Errors from encoding a bitmap.
#[derive( Debug, thiserror::Error )]
pub enum Error {
    #[error( "Error saving image: image size is zero" )]
    SizeIsZero,

    #[error( "Error saving image: image size is too big" )]
    SizeTooBig { width: u32, height: u32 },

    #[error( "Error saving image: pixel buffer is too small" )]
    BufferTooSmall { needed: u64, actual: usize },

    /// Displays the OS error; it has no `source()`.
    #[error( "{0}" )]
    CantOpenFile( io::Error ),

    #[error( "{0}" )]
    Write( io::Error ),
}

pub type Result<T> = std::result::Result<T, Error>;

const SUCCESS_TEXT: &str = "Success";
const UNKNOWN_TEXT: &str = "Unknown result code";

/// Numeric outcome of one encoding attempt.
#[repr( u32 )]
#[derive( Debug, PartialEq, Eq, Clone, Copy )]
pub enum ResultCode {
    Success = 0,
    SizeIsZero = 1,
    SizeTooBig = 2,
    CantOpenFile = 3,
    WriteError = 4,
    BufferTooSmall = 5,
}

impl ResultCode {
    pub fn of( result: &Result<()> ) -> ResultCode {
        match result {
            Ok( () ) => ResultCode::Success,
            Err( e ) => e.code(),
        }
    }

    pub fn from_raw( raw: u32 ) -> Option<ResultCode> {
        match raw {
            0 => Some( ResultCode::Success ),
            1 => Some( ResultCode::SizeIsZero ),
            2 => Some( ResultCode::SizeTooBig ),
            3 => Some( ResultCode::CantOpenFile ),
            4 => Some( ResultCode::WriteError ),
            5 => Some( ResultCode::BufferTooSmall ),
            _ => None,
        }
    }
}

impl Error {
    pub fn code( &self ) -> ResultCode {
        match self {
            Error::SizeIsZero => ResultCode::SizeIsZero,
            Error::SizeTooBig { .. } => ResultCode::SizeTooBig,
            Error::BufferTooSmall { .. } => ResultCode::BufferTooSmall,
            Error::CantOpenFile( _ ) => ResultCode::CantOpenFile,
            Error::Write( _ ) => ResultCode::WriteError,
        }
    }
}

/// Human readable text for the outcome of `encode`.
///
/// I/O failures report the OS error captured when the failure happened, in
/// the form `io::Error` displays it: the system message followed by
/// ` (os error N)` for errors coming from the OS.
pub fn describe( result: &Result<()> ) -> String {
    match result {
        Ok( () ) => SUCCESS_TEXT.to_string(),
        Err( e ) => e.to_string(),
    }
}

/// Human readable text for a raw result code.
///
/// Codes for I/O failures carry no error of their own, so these report the
/// last OS error of the calling thread. Call this right after the failing
/// operation.
///
/// Code 5 (`BufferTooSmall`) is known here and gets its own text, so callers
/// that only expect codes 0 to 4 see that text rather than
/// "Unknown result code" for it.
pub fn describe_code( raw: u32 ) -> String {
    match ResultCode::from_raw( raw ) {
        Some( ResultCode::Success ) => SUCCESS_TEXT.to_string(),
        Some( ResultCode::SizeIsZero ) => Error::SizeIsZero.to_string(),
        Some( ResultCode::SizeTooBig ) =>
            Error::SizeTooBig { width: 0, height: 0 }.to_string(),
        Some( ResultCode::BufferTooSmall ) =>
            Error::BufferTooSmall { needed: 0, actual: 0 }.to_string(),
        Some( ResultCode::CantOpenFile )
        | Some( ResultCode::WriteError ) => io::Error::last_os_error().to_string(),
        None => UNKNOWN_TEXT.to_string(),
    }
}
