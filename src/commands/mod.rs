use clap::Subcommand;

/// LinkedIn authorization helpers.
#[derive(Subcommand, Debug, Clone)]
pub enum AuthCommands {
    /// Print the URL that starts the LinkedIn authorization flow
    Url,

    /// Exchange an authorization code for an access token
    Exchange {
        /// The `code` query parameter from the redirect
        #[arg(long)]
        code: String,

        /// App client secret (prompted for when omitted)
        #[arg(long)]
        client_secret: Option<String>,
    },
}
