use r2_image_sync::{args, run_app};

fn main() {
    // Parse command-line arguments
    let args = args::args_checks();

    // Run the upload pass
    if let Err(e) = run_app(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
