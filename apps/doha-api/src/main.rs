use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = doha_api::Args::parse();
	doha_api::run(args).await
}
