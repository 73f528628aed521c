use pnmslim::{energy_to_image, reduce_width, PixelGrid};
use std::fs;
use std::io::{self, Cursor, Write};

extern crate clap;
extern crate image;

use clap::{App, Arg};
use failure::{format_err, Error};
use image::codecs::pnm::{PnmSubtype, SampleEncoding};
use image::{DynamicImage, ImageOutputFormat};
use log::info;

fn run() -> Result<(), Error> {
    let matches = App::new("pnmslim")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Narrow an image by carving out its least interesting vertical seams")
        .arg(
            Arg::with_name("image")
                .help("The image to slim")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("seams")
                .help("How many columns to remove")
                .required_unless("energy")
                .index(2),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result (stdout if omitted)")
                .short("o")
                .long("output")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("energy")
                .help("Write the energy map of the image instead of slimming it")
                .long("energy"),
        )
        .get_matches();

    let path = matches
        .value_of("image")
        .ok_or_else(|| format_err!("no image given"))?;
    let source = image::open(path)?;
    let grid = PixelGrid::from_image(&source);
    info!("read {} ({}x{})", path, grid.width(), grid.height());

    let (result, subtype) = if matches.is_present("energy") {
        (
            DynamicImage::ImageLuma8(energy_to_image(&grid)?),
            PnmSubtype::Graymap(SampleEncoding::Binary),
        )
    } else {
        let seams: u32 = matches
            .value_of("seams")
            .ok_or_else(|| format_err!("no seam count given"))?
            .parse()
            .map_err(|e| format_err!("seam count must be a non-negative integer: {}", e))?;
        let slim = reduce_width(&grid, seams)?;
        info!("slimmed to {}x{}", slim.width(), slim.height());
        (
            DynamicImage::ImageRgb8(slim.to_image()),
            PnmSubtype::Pixmap(SampleEncoding::Binary),
        )
    };

    let mut encoded = Vec::new();
    result.write_to(&mut Cursor::new(&mut encoded), ImageOutputFormat::Pnm(subtype))?;
    match matches.value_of("output") {
        Some(out) => fs::write(out, &encoded)?,
        None => io::stdout().write_all(&encoded)?,
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("pnmslim: {}", e);
        std::process::exit(1);
    }
}
