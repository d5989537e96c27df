use reqwest::blocking::Client;

use crate::error::Error;

/// A blocking client with the request timeout disabled: a hung master hangs
/// the run rather than failing it part-way through.
pub fn client() -> Result<Client, Error> {
    let client = Client::builder().timeout(None).build()?;

    Ok(client)
}
