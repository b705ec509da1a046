//! Agent payloads.
//!
//! The agent endpoints are the one corner of the API speaking lowercase
//! keys at the top level (`config`, `member`, `stats`, `num_joined`), with
//! PascalCase resuming inside gossip member records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The agent's self-description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentSelf {
    /// Full agent configuration; shape varies by version, kept opaque.
    #[serde(rename = "config", skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,

    #[serde(rename = "member", skip_serializing_if = "Option::is_none")]
    pub member: Option<Member>,

    /// Runtime counters; shape varies by version, kept opaque.
    #[serde(rename = "stats", skip_serializing_if = "Option::is_none")]
    pub stats: Option<Value>,
}

/// One gossip-pool member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "Addr", skip_serializing_if = "Option::is_none")]
    pub addr: Option<String>,

    #[serde(rename = "Port", skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,

    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "ProtocolMin", skip_serializing_if = "Option::is_none")]
    pub protocol_min: Option<i32>,

    #[serde(rename = "ProtocolMax", skip_serializing_if = "Option::is_none")]
    pub protocol_max: Option<i32>,

    #[serde(rename = "ProtocolCur", skip_serializing_if = "Option::is_none")]
    pub protocol_cur: Option<i32>,

    #[serde(rename = "DelegateMin", skip_serializing_if = "Option::is_none")]
    pub delegate_min: Option<i32>,

    #[serde(rename = "DelegateMax", skip_serializing_if = "Option::is_none")]
    pub delegate_max: Option<i32>,

    #[serde(rename = "DelegateCur", skip_serializing_if = "Option::is_none")]
    pub delegate_cur: Option<i32>,
}

/// Result of asking the agent to join an address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinResult {
    #[serde(rename = "num_joined", skip_serializing_if = "Option::is_none")]
    pub num_joined: Option<i32>,

    #[serde(rename = "error", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_self_keeps_config_opaque() {
        let raw = r#"{
            "config": {"Region": "global", "Datacenter": "dc1"},
            "member": {"Name": "server-1.global", "Addr": "127.0.0.1", "Port": 4648, "Status": "alive"},
            "stats": {"raft": {"term": "2"}}
        }"#;
        let info: AgentSelf = serde_json::from_str(raw).unwrap();
        assert_eq!(info.config.as_ref().unwrap()["Region"], "global");
        assert_eq!(info.member.as_ref().unwrap().port, Some(4648));
    }

    #[test]
    fn join_result_uses_lowercase_keys() {
        let result: JoinResult = serde_json::from_str(r#"{"num_joined": 1, "error": ""}"#).unwrap();
        assert_eq!(result.num_joined, Some(1));
        assert_eq!(result.error.as_deref(), Some(""));
    }
}
