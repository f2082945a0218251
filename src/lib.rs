//! # bmp_save
//!
//! A single pass encoder for Microsoft *bmp* files.
//!
//! The pixel buffer holds `width * height` pixels as red, green, blue bytes,
//! row by row from the top. The file gets a 54 byte header followed by the
//! rows as 24-bit blue, green, red pixels.
//!
//! ## Example
//!
//! ```rust,no_run
//! let width = 2;
//! let height = 2;
//! let pixels = [
//!     255, 0, 0,   0, 255, 0,
//!     0, 0, 255,   255, 255, 0,
//! ];
//!
//! let result = bmp_save::encode( "image.bmp", width, height, &pixels );
//! println!( "{}", bmp_save::describe( &result ) );
//! ```
//!
extern crate byteorder;

mod bitmap;
mod bmp;
mod error;

use std::fs::File;
use std::io::{
    BufWriter,
    Write,
};
use std::path::Path;

use bitmap::Layout;

pub use error::{
    describe,
    describe_code,
    Error,
    Result,
    ResultCode,
};
pub use bmp::HEADER_SIZE;

/// Writes the image to the file at `path`, creating or truncating it.
///
/// The dimensions and the buffer are checked before the file is touched.
/// A failed write leaves the partially written file behind.
pub fn encode<P: AsRef<Path>>(
    path: P, width: u32, height: u32, pixels: &[u8] ) -> Result<()> {

    let path = path.as_ref();
    let layout = Layout::new( width, height )?;
    layout.check_buffer( pixels )?;

    let file = File::create( path ).map_err( Error::CantOpenFile )?;
    let mut output = BufWriter::new( file );

    write_image( &mut output, &layout, pixels )
        .and_then( |_| output.flush().map_err( Error::Write ) )
        .map_err( |e| {
            log::warn!( "Failed writing {}: {}", path.display(), e );
            e
        } )?;

    log::debug!( "Wrote {}x{} bitmap ({} bytes) to {}",
        width, height, layout.file_size, path.display() );

    Ok( () )
}

/// Writes the image into any writer.
pub fn encode_to<W: Write + ?Sized>(
    output: &mut W, width: u32, height: u32, pixels: &[u8] ) -> Result<()> {

    let layout = Layout::new( width, height )?;
    layout.check_buffer( pixels )?;

    write_image( output, &layout, pixels )
}

fn write_image<W: Write + ?Sized>(
    output: &mut W, layout: &Layout, pixels: &[u8] ) -> Result<()> {

    layout.header().to_writer( output ).map_err( Error::Write )?;
    bitmap::write_pixels( output, layout, pixels ).map_err( Error::Write )
}
