use placeholder_png::{
  create_png,
  png::{decode_rgb8, encode_rgb8, png_crc, ChunkTag, RawPngChunkIter},
  Finish, ImageDescriptor, RGB888,
};

#[test]
fn test_RawPngChunkIter_no_panics() {
  // even totally random data should never panic the iterator!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    for _ in RawPngChunkIter::new(&v) {
      //
    }
  }
  // nor should any prefix of a real PNG
  let png = create_png(7, 5, (1, 2, 3)).unwrap();
  for cut in 0..png.len() {
    for _ in RawPngChunkIter::new(&png[..cut]) {
      //
    }
  }
}

#[test]
fn test_chunk_order_and_crcs() {
  let finishes = [
    Finish::PLAIN,
    Finish::TECHNICAL,
    Finish::LOGO,
    Finish { scanlines: true, vignette: true, logo: true },
  ];
  for (width, height) in [(1, 1), (3, 17), (64, 64), (300, 2)] {
    for finish in finishes {
      let desc = ImageDescriptor::gradient(width, height, RGB888::new(220, 38, 38), RGB888::new(69, 10, 10))
        .with_finish(finish);
      let png = desc.encode().unwrap();
      let chunks: Vec<_> = RawPngChunkIter::new(&png).collect();
      let tags: Vec<_> = chunks.iter().map(|c| c.tag().unwrap()).collect();
      assert_eq!(tags, [ChunkTag::IHDR, ChunkTag::IDAT, ChunkTag::IEND], "{desc:?}");
      for chunk in &chunks {
        let expected = png_crc(chunk.chunk_ty.as_bytes().iter().chain(chunk.data).copied());
        assert_eq!(chunk.declared_crc, expected, "{desc:?} {chunk:?}");
      }
      assert!(chunks[2].data.is_empty());
    }
  }
}

#[test]
fn test_solid_decodes_exactly() {
  let png = create_png(600, 400, (245, 158, 11)).unwrap();
  let (width, height, rgb) = super::decode_reference(&png);
  assert_eq!((width, height), (600, 400));
  assert_eq!(rgb.len(), 600 * 400 * 3);
  assert!(rgb.chunks_exact(3).all(|p| p == [245, 158, 11]));

  // and our own reader agrees
  let image = decode_rgb8(&png).unwrap();
  assert!(image.pixels.iter().all(|&p| p == RGB888::new(245, 158, 11)));
}

#[test]
fn test_gradient_ends() {
  let top = RGB888::new(37, 99, 235);
  let bottom = RGB888::new(30, 58, 138);
  let png = ImageDescriptor::gradient(10, 400, top, bottom).encode().unwrap();
  let (width, height, rgb) = super::decode_reference(&png);
  assert_eq!((width, height), (10, 400));
  let line = width as usize * 3;
  let first = &rgb[..line];
  let last = &rgb[rgb.len() - line..];
  for p in first.chunks_exact(3) {
    assert_eq!(p, <[u8; 3]>::from(top));
  }
  for p in last.chunks_exact(3) {
    for (got, want) in p.iter().zip(<[u8; 3]>::from(bottom)) {
      assert!(got.abs_diff(want) <= 1, "{p:?} vs {bottom:?}");
    }
  }
}

#[test]
fn test_effects_survive_encoding() {
  let desc = ImageDescriptor::gradient(64, 64, RGB888::new(15, 23, 42), RGB888::new(2, 6, 23))
    .with_finish(Finish { scanlines: true, vignette: true, logo: true });
  let png = desc.encode().unwrap();
  let (width, _, rgb) = super::decode_reference(&png);
  for (i, p) in rgb.chunks_exact(3).enumerate() {
    let (x, y) = ((i % width as usize) as u32, (i / width as usize) as u32);
    assert_eq!(p, <[u8; 3]>::from(desc.pixel(x, y)), "({x}, {y})");
  }
}

#[test]
fn test_idempotent_encoding() {
  let desc = ImageDescriptor::gradient(120, 63, RGB888::new(245, 158, 11), RGB888::new(120, 53, 15))
    .with_finish(Finish::TECHNICAL);
  assert_eq!(desc.encode().unwrap(), desc.encode().unwrap());
}

#[test]
fn test_bad_inputs_fail_fast() {
  use placeholder_png::PngError;
  assert_eq!(create_png(0, 10, (0, 0, 0)), Err(PngError::WidthOrHeightZero));
  assert_eq!(encode_rgb8(2, 2, &[0; 3]), Err(PngError::ScanlineLength));
  assert_eq!(ChunkTag::try_from("IDATA"), Err(PngError::InvalidChunkTag));
  assert_eq!(ChunkTag::try_from("12AB"), Err(PngError::InvalidChunkTag));
}
