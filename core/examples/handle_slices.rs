use handle_core::handle::{build_slices, HandleConfig};

fn main() {
    let config = HandleConfig {
        low_resolution: true,
        ..Default::default()
    };
    let slices = match build_slices(&config) {
        Ok(slices) => slices,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    for (i, slice) in slices.iter().enumerate() {
        let widest = slice.points().iter().map(|p| p.x).fold(f64::MIN, f64::max);
        println!("{:3}  z={:7.3}  half-width={:6.3}", i, slice.z().unwrap_or_default(), widest);
    }
}
