//! # bmp
//!
//! The 54 byte file and info header written in front of the pixel data.

use std::io::{
    Write,
    Result,
};

use byteorder::{
    WriteBytesExt,
    LittleEndian,
};

/// Size of the file header plus the info header in bytes.
pub const HEADER_SIZE: u32 = 54;

const MAGIC: [u8; 2] = [ b'B', b'M' ];
const INFO_HEADER_SIZE: u32 = 40; // Microsoft version 3
const PLANES: u16 = 1;
const BITS_PER_PIXEL: u16 = 24;
const PIXELS_PER_METER: u32 = 2835; // 72 dpi

/// Header fields that vary between images.
///
/// | Offset | Field                  |
/// |--------|------------------------|
/// | 0      | `BM`                   |
/// | 2      | file size              |
/// | 6      | reserved               |
/// | 10     | pixel data offset (54) |
/// | 14     | info header size (40)  |
/// | 18     | width                  |
/// | 22     | negated height         |
/// | 26     | planes (1)             |
/// | 28     | bits per pixel (24)    |
/// | 30     | compression, image size (0) |
/// | 38     | horizontal resolution  |
/// | 42     | vertical resolution    |
/// | 46     | used and important colors (0) |
#[derive( Debug, PartialEq, Eq, Clone, Copy )]
pub struct Header {
    pub file_size: u32,
    pub width: u32,
    pub height: u32,
}

impl Header {
    pub fn new( file_size: u32, width: u32, height: u32 ) -> Header {
        Header { file_size, width, height }
    }

    /// The height field as stored, the two's complement of the height.
    pub fn stored_height( &self ) -> u32 {
        self.height.wrapping_neg()
    }

    pub fn to_writer<W: Write + ?Sized>( &self, output: &mut W ) -> Result<()> {
        // File header
        output.write_all( &MAGIC )?;
        output.write_u32::<LittleEndian>( self.file_size )?;
        output.write_u32::<LittleEndian>( 0 )?; // reserved
        output.write_u32::<LittleEndian>( HEADER_SIZE )?;

        // Info header
        output.write_u32::<LittleEndian>( INFO_HEADER_SIZE )?;
        output.write_u32::<LittleEndian>( self.width )?;
        output.write_u32::<LittleEndian>( self.stored_height() )?;
        output.write_u16::<LittleEndian>( PLANES )?;
        output.write_u16::<LittleEndian>( BITS_PER_PIXEL )?;
        output.write_u32::<LittleEndian>( 0 )?; // compression (BI_RGB)
        output.write_u32::<LittleEndian>( 0 )?; // image size
        output.write_u32::<LittleEndian>( PIXELS_PER_METER )?;
        output.write_u32::<LittleEndian>( PIXELS_PER_METER )?;
        output.write_u32::<LittleEndian>( 0 )?; // used colors
        output.write_u32::<LittleEndian>( 0 )?; // important colors

        Ok( () )
    }
}
