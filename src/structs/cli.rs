use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "vertex-probe")]
#[clap(version, about = "Send one Gemini generation request to Vertex AI and print the response", long_about = None)]
pub struct Cli {
    /// Path to a service account JSON key file
    #[clap(long = "json_key_file", value_name = "PATH")]
    pub json_key_file: Option<String>,
}
