use amqcheck_check::{CheckGroup, Measurement};
use amqcheck_jolokia::Error;

/// Turns a fetch error into the conventional failure measurement, named
/// after the failed step so the report line explains itself.
pub(crate) fn failure_measurement(err: &Error, what: &str, group: CheckGroup) -> Measurement {
    let name = match err {
        Error::Transport(msg) => format!("Fetching network FAILED: {msg}"),
        Error::Url(parse) => format!("Fetching network FAILED: {parse}"),
        Error::Decode(decode) => format!("Decoding Json FAILED: {decode}"),
        Error::MissingKey(key) => format!("Getting {what} FAILED: missing key {key}"),
    };
    Measurement::failure(name, group)
}
