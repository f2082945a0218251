use std::io::{
    self,
    Write,
};

use crate::bmp::{
    Header,
    HEADER_SIZE,
};
use crate::error::{
    Error,
    Result,
};

const MAX_WIDTH: u32 = 0x5555_5542;
const MAX_HEIGHT: u32 = 0x3fff_fff2;
const MAX_FILE_SIZE: u64 = 0xffff_ffff;

const BYTES_PER_PIXEL: usize = 3;

/// Validated dimensions of an image and the sizes derived from them.
#[derive( Debug, PartialEq, Eq, Clone, Copy )]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    pub file_size: u32,
}

impl Layout {
    /// Checks the dimensions in order: zero size, the coarse bounds on
    /// width and height, then the resulting file size.
    pub fn new( width: u32, height: u32 ) -> Result<Layout> {
        if width == 0 || height == 0 {
            return Err( Error::SizeIsZero );
        }

        if width > MAX_WIDTH || height > MAX_HEIGHT {
            return Err( Error::SizeTooBig { width, height } );
        }

        // Rows are padded by width % 4 bytes. This is not the usual bmp
        // row alignment; existing output depends on it.
        let padding = width % 4;
        let file_size = ( width as u64 * 3 + padding as u64 ) * height as u64
            + HEADER_SIZE as u64;
        if file_size > MAX_FILE_SIZE {
            return Err( Error::SizeTooBig { width, height } );
        }

        Ok( Layout {
            width,
            height,
            padding,
            file_size: file_size as u32,
        } )
    }

    /// Number of pixel bytes the caller has to supply.
    pub fn pixel_bytes( &self ) -> u64 {
        self.width as u64 * self.height as u64 * BYTES_PER_PIXEL as u64
    }

    pub fn check_buffer( &self, pixels: &[u8] ) -> Result<()> {
        let needed = self.pixel_bytes();
        if ( pixels.len() as u64 ) < needed {
            return Err( Error::BufferTooSmall { needed, actual: pixels.len() } );
        }
        Ok( () )
    }

    pub fn header( &self ) -> Header {
        Header::new( self.file_size, self.width, self.height )
    }
}

/// Writes the rows in buffer order, each pixel as blue, green, red,
/// followed by the row padding.
pub fn write_pixels<W: Write + ?Sized>(
    output: &mut W, layout: &Layout, pixels: &[u8] ) -> io::Result<()> {

    let row_len = layout.width as usize * BYTES_PER_PIXEL;
    let padding = &[0u8; 4][..layout.padding as usize];
    let mut row_buf = Vec::with_capacity( row_len + padding.len() );

    for row in pixels.chunks_exact( row_len ).take( layout.height as usize ) {
        row_buf.clear();
        for rgb in row.chunks_exact( BYTES_PER_PIXEL ) {
            row_buf.extend_from_slice( &[ rgb[2], rgb[1], rgb[0] ] );
        }
        row_buf.extend_from_slice( padding );

        output.write_all( &row_buf )?;
    }

    Ok( () )
}
