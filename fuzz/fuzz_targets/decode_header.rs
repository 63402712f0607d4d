use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let _ = interlace::decode_header(data, 0);
        });
    }
}
