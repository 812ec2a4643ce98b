use anyhow::Result;
use passgen_hashcheck::{password_hash, BreachCheck, HashCheck, ENDPOINT};
use passgen_unit_tests::CannedRange;
use std::time::Duration;

const RANGE: &str = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:10434004\r\n\
                     1E4C9B93F3F0682250B6CF8331B7EE68FD9:0\r\n";

#[tokio::test]
async fn hashcheck_canned_range() -> Result<()> {
    let checker = CannedRange(RANGE.to_owned());
    assert!(checker.is_leaked("password").await?);
    assert!(!checker.is_leaked("correct horse battery").await?);
    Ok(())
}

#[test]
fn hashcheck_prefix() {
    assert!(password_hash("password").starts_with("5BAA6"));
}

#[test]
fn hashcheck_client_endpoint() -> Result<()> {
    let client = HashCheck::new(None, Duration::from_secs(1))?;
    assert_eq!(ENDPOINT, client.endpoint());
    Ok(())
}
