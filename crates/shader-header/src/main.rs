fn main() -> anyhow::Result<()> {
    env_logger::init();

    let status = shader_header::cli::run(std::env::args_os())?;
    std::process::exit(status);
}
