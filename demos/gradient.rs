//! Writes a red/green gradient to `example.bmp` or the path given as the
//! first argument.
use std::env;

const WIDTH: u32 = 1018;
const HEIGHT: u32 = 822;

fn gradient( width: u32, height: u32 ) -> Vec<u8> {
    let mut image = Vec::with_capacity( width as usize * height as usize * 3 );

    for row in 0..height {
        for column in 0..width {
            let r = row as f64 / height as f64;
            let g = column as f64 / width as f64;
            let b = 0.5 * ( r + g );

            image.push( ( r * 255.0 ) as u8 );
            image.push( ( g * 255.0 ) as u8 );
            image.push( ( b * 255.0 ) as u8 );
        }
    }

    image
}

fn main() {
    let path = env::args().nth( 1 ).unwrap_or_else( || "example.bmp".to_string() );

    let image = gradient( WIDTH, HEIGHT );
    let result = bmp_save::encode( &path, WIDTH, HEIGHT, &image );
    println!( "{}", bmp_save::describe( &result ) );
}
