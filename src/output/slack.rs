//! Slack Block Kit document
//!
//! One `section` block per banner line, `mrkdwn` text.

use serde::Serialize;

use crate::render::BannerResult;

#[derive(Debug, Serialize)]
struct Message<'a> {
    blocks: Vec<Block<'a>>,
}

#[derive(Debug, Serialize)]
struct Block<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: BlockText<'a>,
}

#[derive(Debug, Serialize)]
struct BlockText<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

/// Build the Block Kit value for a banner
pub fn to_blocks(result: &BannerResult) -> serde_json::Result<serde_json::Value> {
    let message = Message {
        blocks: result
            .lines
            .iter()
            .map(|line| Block {
                kind: "section",
                text: BlockText {
                    kind: "mrkdwn",
                    text: line,
                },
            })
            .collect(),
    };
    serde_json::to_value(message)
}

/// Pretty-printed Block Kit JSON
pub fn to_json(result: &BannerResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&to_blocks(result)?)
}
