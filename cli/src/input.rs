use std::collections::BTreeMap;

use anyhow::{Context, Result};
use log::{info, warn};
use num_bigint::BigInt;
use serde::Deserialize;

use recon::{Share, ShareSet};

/// A share document: reconstruction parameters under "keys", plus one entry
/// per share keyed by its decimal id.
#[derive(Deserialize, Debug)]
pub struct SharesFile {
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, RawShare>,
}

#[derive(Deserialize, Debug)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

/// A share as written in the file. Both fields appear as JSON numbers and as
/// quoted strings in the wild, so both forms are accepted.
#[derive(Deserialize, Debug)]
pub struct RawShare {
    pub base: NumberOrString,
    pub value: NumberOrString,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(u64),
    String(String),
}

impl NumberOrString {
    fn to_digits(&self) -> String {
        match self {
            NumberOrString::Number(v) => v.to_string(),
            NumberOrString::String(s) => s.trim().to_string(),
        }
    }

    fn to_u32(&self) -> Result<u32> {
        match self {
            NumberOrString::Number(v) => Ok(u32::try_from(*v)?),
            NumberOrString::String(s) => Ok(s.trim().parse()?),
        }
    }
}

/// Parses [contents] and reconstructs the secret it shares.
pub fn recover(contents: &str) -> Result<BigInt> {
    let file: SharesFile = serde_json::from_str(contents)?;
    let set = to_share_set(&file)?;
    Ok(set.reconstruct()?)
}

/// Decodes every share entry of [file] into a [ShareSet].
pub fn to_share_set(file: &SharesFile) -> Result<ShareSet> {
    if file.shares.len() != file.keys.n {
        warn!(
            "file lists n = {} but carries {} shares",
            file.keys.n,
            file.shares.len()
        );
    }

    let mut shares = Vec::with_capacity(file.shares.len());
    for (key, raw) in &file.shares {
        let id: u64 = key
            .trim()
            .parse()
            .with_context(|| format!("share key {:?} is not an integer!", key))?;
        let base = raw
            .base
            .to_u32()
            .with_context(|| format!("share {} has a malformed base!", id))?;
        shares.push(Share::decode(id, base, &raw.value.to_digits())?);
    }
    info!("decoded {} shares, threshold {}", shares.len(), file.keys.k);

    Ok(ShareSet::new(shares, file.keys.k)?)
}
