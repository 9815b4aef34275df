//! Test fixtures: PNG and PDF payloads.

use std::io::Cursor;

/// Encode a real PNG of the given dimensions.
pub fn create_test_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .expect("Failed to encode test PNG");
    buf.into_inner()
}

/// Minimal valid PDF.
pub fn create_test_pdf() -> Vec<u8> {
    b"%PDF-1.4
1 0 obj
<< /Type /Catalog /Pages 2 0 R >>
endobj
2 0 obj
<< /Type /Pages /Kids [3 0 R] /Count 1 >>
endobj
3 0 obj
<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >>
endobj
trailer
<< /Size 4 /Root 1 0 R >>
%%EOF"
        .to_vec()
}

/// A PDF payload padded out to exactly `size` bytes.
pub fn create_pdf_of_size(size: usize) -> Vec<u8> {
    let mut pdf = create_test_pdf();
    if pdf.len() < size {
        pdf.resize(size, b' ');
    }
    pdf
}

/// Decode stored JPEG bytes and return (width, height).
pub fn jpeg_dimensions(data: &[u8]) -> (u32, u32) {
    let img = image::load_from_memory(data).expect("Stored object is not a decodable image");
    (img.width(), img.height())
}
