use powershot_a5_rs::image_pipeline::raw::{
    BYTE_ORDER_MARK, HEADER_LEN, HEAP_SIGNATURE, HEAP_SIGNATURE_OFFSET, RECORD_LEN, SENSOR_HEIGHT,
    SENSOR_WIDTH,
};
use powershot_a5_rs::image_pipeline::{
    ConversionConfig, ConversionError, CrwReader, CrwToPpmPipeline, RawImageReader, filter_color,
    output_path_for,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Container whose every ten-bit sample is `sample`.
fn constant_crw(sample: u16) -> Vec<u8> {
    let s = u32::from(sample & 0x3ff);
    // Eight copies of the same ten-bit value, packed.
    let lo = (s & 0xff) as u8;
    let group = [
        (((s & 3) << 6) | (s >> 4)) as u8,
        (s >> 2) as u8,
        (((s & 0x3f) << 2) | (s >> 8)) as u8,
        (((s & 0xf) << 4) | (s >> 6)) as u8,
        (s >> 2) as u8,
        lo,
        (((s & 0xf) << 4) | (s >> 6)) as u8,
        (((s & 3) << 6) | (s >> 4)) as u8,
        lo,
        (((s & 0x3f) << 2) | (s >> 8)) as u8,
    ];

    let mut data = vec![0u8; HEADER_LEN];
    data[..2].copy_from_slice(BYTE_ORDER_MARK);
    data[HEAP_SIGNATURE_OFFSET..HEAP_SIGNATURE_OFFSET + 8].copy_from_slice(HEAP_SIGNATURE);
    for _ in 0..SENSOR_HEIGHT {
        let mut record = vec![0u8; RECORD_LEN];
        for chunk in record[..1200].chunks_exact_mut(10) {
            chunk.copy_from_slice(&group);
        }
        data.extend_from_slice(&record);
    }
    data
}

fn parse_header(bytes: &[u8]) -> (String, usize, usize, usize, usize) {
    let text = String::from_utf8_lossy(&bytes[..32.min(bytes.len())]).into_owned();
    let mut fields = text.split_ascii_whitespace();
    let tag = fields.next().unwrap().to_string();
    let width = fields.next().unwrap().parse().unwrap();
    let height = fields.next().unwrap().parse().unwrap();
    let max = fields.next().unwrap().parse().unwrap();
    let header_len = format!("{tag}\n{width} {height}\n{max}\n").len();
    (tag, width, height, max, header_len)
}

#[test]
fn constant_container_unpacks_to_constant_mosaic() {
    let grid = CrwReader.read_raw(&constant_crw(0x2a5)).unwrap();
    for row in [0, 1, 2, 3, 400, SENSOR_HEIGHT - 1] {
        for col in [0, 1, 7, 8, 500, SENSOR_WIDTH - 1] {
            let pixel = grid.pixel(row, col);
            assert_eq!(pixel[filter_color(row, col).index()], 0x2a5 << 4);
            assert_eq!(pixel.iter().filter(|&&v| v != 0).count(), 1);
        }
    }
}

#[test]
fn constant_container_renders_full_frame() {
    let pipeline = CrwToPpmPipeline::new(ConversionConfig::default());
    let mut output = Vec::new();
    pipeline.convert(&constant_crw(300), &mut output).unwrap();

    let (tag, width, height, max, header_len) = parse_header(&output);
    assert_eq!(tag, "P6");
    assert_eq!(width, SENSOR_WIDTH - 2);
    assert_eq!(height, SENSOR_HEIGHT - 2);
    assert_eq!(max, 255);
    assert_eq!(output.len(), header_len + width * height * 3);
    assert!(output[header_len..].iter().any(|&v| v != 0));
}

#[test]
fn random_container_renders_full_frame() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut data = constant_crw(0);
    for byte in &mut data[HEADER_LEN..] {
        *byte = rng.random();
    }

    let config = ConversionConfig::builder().refine_passes(2).build();
    let pipeline = CrwToPpmPipeline::new(config);
    let mut output = Vec::new();
    pipeline.convert(&data, &mut output).unwrap();

    let (_, width, height, _, header_len) = parse_header(&output);
    assert_eq!(output.len(), header_len + width * height * 3);
}

#[test]
fn black_container_still_renders() {
    let pipeline = CrwToPpmPipeline::new(ConversionConfig::default());
    let mut output = Vec::new();
    pipeline.convert(&constant_crw(0), &mut output).unwrap();

    let (_, _, _, _, header_len) = parse_header(&output);
    assert!(output[header_len..].iter().all(|&v| v == 0));
}

#[test]
fn malformed_header_writes_nothing() {
    let mut data = constant_crw(300);
    data[0] = b'X';

    let pipeline = CrwToPpmPipeline::new(ConversionConfig::default());
    let mut output = Vec::new();
    let result = pipeline.convert(&data, &mut output);

    assert!(matches!(result, Err(ConversionError::FormatError(_))));
    assert!(output.is_empty());
}

#[test]
fn truncated_container_produces_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("IMG_0042.CRW");
    let data = constant_crw(300);
    std::fs::write(&input, &data[..HEADER_LEN + 775 * RECORD_LEN]).unwrap();
    let output = output_path_for(&input);

    let pipeline = CrwToPpmPipeline::new(ConversionConfig::default());
    let result = pipeline.convert_file(&input, &output);

    assert!(matches!(result, Err(ConversionError::TruncatedInputError { .. })));
    assert!(!output.exists());
}

#[test]
fn convert_file_replaces_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("IMG_0001.CRW");
    std::fs::write(&input, constant_crw(500)).unwrap();
    let output = output_path_for(&input);
    std::fs::write(&output, b"stale").unwrap();

    let pipeline = CrwToPpmPipeline::new(ConversionConfig::default());
    pipeline.convert_file(&input, &output).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"P6\n958 774\n255\n"));
}
