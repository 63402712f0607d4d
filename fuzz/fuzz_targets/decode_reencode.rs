use honggfuzz::fuzz;

// A decoded header always satisfies the parents prefix invariant, so
// re-encoding it must reach a fixed point after one pass. The bytes may
// shrink (the input can store values wider than needed) but the record
// itself must survive.
fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok((header, _)) = interlace::decode_header(data, 0) {
                let mut out = Vec::new();
                interlace::encode_header(&header, &mut out);
                let (again, used) = interlace::decode_header(&out, 0).unwrap();
                assert_eq!(again, header);
                assert_eq!(used, out.len());
            }
        });
    }
}
