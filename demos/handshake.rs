//! Walks one OpenID 2.0 login through all three handshake steps against a scripted provider.
//!
//! 1. The first request carries no identifier, so the engine asks the host to render the
//!    identifier form.
//! 2. The form post carries `openid_url`, so the engine redirects to the provider.
//! 3. The provider callback carries `openid.mode=id_res`, so the engine validates it and hands
//!    the host a normalized auth envelope.

// crates.io
use color_eyre::Result;
// self
use openid_strategy::{
	auth::{AuthEnvelope, ErrorEnvelope},
	flows::HandshakeEngine,
	http::{InboundRequest, ResultSink, StrategyHost},
	provider::{StrategyConfig, Variant},
	testing::ScriptedClient,
	url::Url,
};

const IDENTITY: &str = "https://id.example.com/alice";

fn main() -> Result<()> {
	color_eyre::install()?;

	let config =
		StrategyConfig::defaults(Variant::OpenId, Url::parse("https://app.example.com/auth")?)?;
	let client = ScriptedClient::new(Url::parse("https://op.example.com/server")?)
		.accepting(IDENTITY)
		.with_attribute("contact/internet/email", "alice@example.com")
		.with_attribute("namePerson/first", "Alice")
		.with_attribute("namePerson/last", "Liddell");
	let engine = HandshakeEngine::<ScriptedClient>::new(config, client);
	let mut host = PrintingHost;

	engine.request(&InboundRequest::new(), &mut host);
	engine.request(&InboundRequest::new().with_form_param("openid_url", IDENTITY), &mut host);

	let callback = Url::parse("https://app.example.com/auth/openid?openid.mode=id_res")?;

	engine.request(&InboundRequest::from_url(&callback), &mut host);

	Ok(())
}

struct PrintingHost;
impl ResultSink for PrintingHost {
	fn on_success(&mut self, envelope: AuthEnvelope) {
		match serde_json::to_string_pretty(&envelope) {
			Ok(json) => println!("Login succeeded:\n{json}"),
			Err(e) => println!("Login succeeded for {}; envelope encoding failed: {e}.", envelope.uid),
		}
	}

	fn on_error(&mut self, envelope: ErrorEnvelope) {
		println!("Login failed ({}): {}.", envelope.code, envelope.message);
	}
}
impl StrategyHost for PrintingHost {
	fn issue_redirect(&mut self, url: &Url) {
		println!("Redirecting to {url}.");
	}

	fn render_form(&mut self, view: &str) {
		println!("Rendering identifier form `{view}`.");
	}
}
