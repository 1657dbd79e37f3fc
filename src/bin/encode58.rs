use inbase58::{Base58Codec, logger};

fn main() -> anyhow::Result<()> {
    logger::setup_logger();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        log::error!("Usage: {} <hex string>", args[0]);
        std::process::exit(1);
    }

    let hex = &args[1];

    let codec = Base58Codec;

    let encoded = codec.encode_from_hex(hex)?;
    log::info!("[Base58] {encoded}");

    Ok(())
}
