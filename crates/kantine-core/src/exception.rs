//! Error taxonomy and Norwegian user messages.
//!
//! Every failure the data layer can surface is classified into one
//! [`ErrorKind`]. User-facing text resolves from the message embedded in the
//! error when there is one, and from the catalog fallback for the classified
//! kind otherwise.

pub type Result<T> = std::result::Result<T, Error>;

/// Failure classification used for message fallbacks and UI branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	Network,
	Authentication,
	Authorization,
	NotFound,
	Server,
	Validation,
	Unknown,
}

impl ErrorKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			ErrorKind::Network => "NETWORK",
			ErrorKind::Authentication => "AUTHENTICATION",
			ErrorKind::Authorization => "AUTHORIZATION",
			ErrorKind::NotFound => "NOT_FOUND",
			ErrorKind::Server => "SERVER",
			ErrorKind::Validation => "VALIDATION",
			ErrorKind::Unknown => "UNKNOWN",
		}
	}

	/// Catalog fallback shown when an error carries no message of its own.
	pub fn default_message(&self) -> &'static str {
		match self {
			ErrorKind::Network => meldinger::nettverk::TILKOBLING_FEILET,
			ErrorKind::Authentication => meldinger::autentisering::KREVES,
			ErrorKind::Authorization => meldinger::autorisasjon::FORBUDT,
			ErrorKind::NotFound => meldinger::ikke_funnet::RESSURS,
			ErrorKind::Server => meldinger::server::INTERN,
			ErrorKind::Validation | ErrorKind::Unknown => meldinger::generisk::NOE_GIKK_GALT,
		}
	}
}

/// Data-layer error.
///
/// `Api` carries whatever `message`/`detail` fields the JSON error body had;
/// the other variants wrap a plain reason string.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
	/// Transport-level failure; the request never produced a response.
	#[error("{0}")]
	Network(String),

	/// Non-2xx response.
	#[error("HTTP {status}")]
	Api {
		status: u16,
		message: Option<String>,
		detail: Option<String>,
	},

	/// A success response whose body could not be decoded as expected.
	#[error("ugyldig svar fra serveren: {0}")]
	Decode(String),

	#[error("konfigurasjonsfeil: {0}")]
	Config(String),

	#[error("{0}")]
	Other(String),
}

impl Error {
	pub fn api(status: u16) -> Self {
		Error::Api {
			status,
			message: None,
			detail: None,
		}
	}

	/// HTTP status carried by the error, when one exists.
	pub fn status(&self) -> Option<u16> {
		match self {
			Error::Api { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Classify the error.
	///
	/// The network-keyword check on the message comes before the status
	/// check, so wrapped transport failures classify as `Network` even when
	/// something attached a status to them.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Error::Network(_) => ErrorKind::Network,
			Error::Api { status, message, .. } => {
				if message.as_deref().is_some_and(has_network_keyword) {
					ErrorKind::Network
				} else {
					classify_status(*status)
				}
			}
			Error::Decode(reason) | Error::Other(reason) => {
				if has_network_keyword(reason) {
					ErrorKind::Network
				} else {
					ErrorKind::Unknown
				}
			}
			Error::Config(_) => ErrorKind::Unknown,
		}
	}

	/// Resolve the user-facing message.
	///
	/// Precedence: the error's own message, then the body `detail`, then the
	/// catalog fallback for the classified kind.
	///
	/// # Examples
	///
	/// ```
	/// use kantine_core::exception::{Error, meldinger};
	///
	/// let err = Error::Api {
	/// 	status: 422,
	/// 	message: None,
	/// 	detail: Some("Kundenavn er påkrevd".to_string()),
	/// };
	/// assert_eq!(err.user_message(), "Kundenavn er påkrevd");
	///
	/// let err = Error::api(500);
	/// assert_eq!(err.user_message(), meldinger::server::INTERN);
	/// ```
	pub fn user_message(&self) -> String {
		match self {
			Error::Api {
				message: Some(message),
				..
			} if !message.is_empty() => message.clone(),
			Error::Api {
				detail: Some(detail),
				..
			} if !detail.is_empty() => detail.clone(),
			Error::Network(reason) | Error::Decode(reason) | Error::Other(reason)
				if !reason.is_empty() =>
			{
				reason.clone()
			}
			_ => self.kind().default_message().to_string(),
		}
	}
}

fn has_network_keyword(message: &str) -> bool {
	message.contains("fetch") || message.contains("network")
}

fn classify_status(status: u16) -> ErrorKind {
	match status {
		401 => ErrorKind::Authentication,
		403 => ErrorKind::Authorization,
		404 => ErrorKind::NotFound,
		s if s >= 500 => ErrorKind::Server,
		s if s >= 400 => ErrorKind::Validation,
		_ => ErrorKind::Unknown,
	}
}

/// CRUD operation, used to phrase failure notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudOp {
	Create,
	Update,
	Delete,
	Read,
}

impl CrudOp {
	fn prefix(&self) -> &'static str {
		match self {
			CrudOp::Create => "Kunne ikke opprette",
			CrudOp::Update => "Kunne ikke oppdatere",
			CrudOp::Delete => "Kunne ikke slette",
			CrudOp::Read => "Kunne ikke laste",
		}
	}
}

/// Failure text for a CRUD operation on a named resource.
///
/// The specific message is appended only when it says more than the generic
/// fallback; otherwise the operation prefix stands alone.
///
/// # Examples
///
/// ```
/// use kantine_core::exception::{CrudOp, Error, crud_failure_message};
///
/// let err = Error::Api {
/// 	status: 409,
/// 	message: Some("Kunden finnes allerede".to_string()),
/// 	detail: None,
/// };
/// assert_eq!(
/// 	crud_failure_message(CrudOp::Create, "kunde", &err),
/// 	"Kunne ikke opprette kunde: Kunden finnes allerede"
/// );
/// ```
pub fn crud_failure_message(op: CrudOp, resource: &str, error: &Error) -> String {
	let base = error.user_message();
	let prefix = format!("{} {}", op.prefix(), resource);
	if base.is_empty() || base == meldinger::generisk::NOE_GIKK_GALT {
		prefix
	} else {
		format!("{}: {}", prefix, base)
	}
}

/// Norwegian user-message catalog.
pub mod meldinger {
	pub mod generisk {
		pub const NOE_GIKK_GALT: &str = "Noe gikk galt. Vennligst prøv igjen.";
		pub const UKJENT_FEIL: &str = "En ukjent feil oppstod.";
	}

	pub mod nettverk {
		pub const TILKOBLING_FEILET: &str =
			"Kunne ikke koble til serveren. Sjekk internettforbindelsen din.";
		pub const TIDSAVBRUDD: &str = "Forespørselen tok for lang tid. Vennligst prøv igjen.";
		pub const FRAKOBLET: &str = "Du er frakoblet. Sjekk internettforbindelsen din.";
	}

	pub mod server {
		pub const INTERN: &str = "En serverfeil oppstod. Vennligst prøv igjen senere.";
		pub const UTILGJENGELIG: &str =
			"Tjenesten er ikke tilgjengelig. Vennligst prøv igjen senere.";
		pub const VEDLIKEHOLD: &str = "Systemet er under vedlikehold. Vennligst prøv igjen senere.";
	}

	pub mod autentisering {
		pub const KREVES: &str = "Du må logge inn for å fortsette.";
		pub const UGYLDIG: &str = "Ugyldig brukernavn eller passord.";
		pub const UTLOPT: &str = "Økten din har utløpt. Vennligst logg inn igjen.";
	}

	pub mod autorisasjon {
		pub const FORBUDT: &str = "Du har ikke tilgang til denne ressursen.";
		pub const MANGLER_TILLATELSE: &str = "Du har ikke nødvendige tillatelser.";
	}

	pub mod ikke_funnet {
		pub const RESSURS: &str = "Den forespurte ressursen ble ikke funnet.";
		pub const SIDE: &str = "Siden du leter etter finnes ikke.";
	}

	pub mod validering {
		pub const PAKREVD: &str = "Dette feltet er påkrevd.";
		pub const UGYLDIG: &str = "Ugyldig verdi.";
		pub const FOR_KORT: &str = "Verdien er for kort.";
		pub const FOR_LANG: &str = "Verdien er for lang.";
	}
}
