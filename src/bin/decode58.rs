use inbase58::{Base58Codec, logger};

fn main() -> anyhow::Result<()> {
    logger::setup_logger();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        log::error!("Usage: {} <base58 string>", args[0]);
        std::process::exit(1);
    }

    let base58 = &args[1];

    let codec = Base58Codec;

    let decoded = codec.decode_to_hex(base58)?; // Validate input
    log::info!("[Hex] {decoded}");

    Ok(())
}
