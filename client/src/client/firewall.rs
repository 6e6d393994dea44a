// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use tracing::instrument;

use api::FormatError;
use api::converters::{firewall, status_from_wire};
use api::firewall::{
    FirewallRule, FirewallRuleList, FirewallRuleListMeta, FirewallRuleMeta, FirewallRuleSpec,
};

use super::{Client, converted, format_failure, settle, transport_failure};
use crate::errors::ClientResult;
use crate::status::IgnoredCodes;

fn rule_meta(interface_id: &str, rule_id: &str) -> FirewallRuleMeta {
    FirewallRuleMeta {
        interface_id: interface_id.to_owned(),
        rule_id: rule_id.to_owned(),
    }
}

impl Client {
    #[instrument(level = "debug", skip(self))]
    pub async fn list_firewall_rules(
        &self,
        interface_id: &str,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<FirewallRuleList> {
        let meta = FirewallRuleListMeta {
            interface_id: interface_id.to_owned(),
        };
        let response = self
            .transport
            .list_firewall_rules(firewall::list_request(&meta))
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        if !status.is_success() {
            return settle(
                FirewallRuleList {
                    meta,
                    items: Vec::new(),
                    status,
                },
                ignored,
            );
        }
        let items = response
            .rules
            .iter()
            .map(|rule| firewall::rule_from_wire(interface_id, rule))
            .collect::<Result<_, _>>()
            .map_err(format_failure)?;
        Ok(FirewallRuleList {
            meta,
            items,
            status,
        })
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn create_firewall_rule(
        &self,
        interface_id: &str,
        rule_id: &str,
        spec: FirewallRuleSpec,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<FirewallRule> {
        let meta = rule_meta(interface_id, rule_id);
        let response = self
            .transport
            .create_firewall_rule(firewall::create_request(&meta, &spec))
            .await
            .map_err(transport_failure)?;
        let status = status_from_wire(response.status.as_ref());
        let spec = status.is_success().then_some(spec);
        settle(FirewallRule { meta, spec, status }, ignored)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn get_firewall_rule(
        &self,
        interface_id: &str,
        rule_id: &str,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<FirewallRule> {
        let meta = rule_meta(interface_id, rule_id);
        let response = self
            .transport
            .get_firewall_rule(firewall::get_request(&meta))
            .await
            .map_err(transport_failure)?;
        let mut record = FirewallRule {
            meta,
            spec: None,
            status: status_from_wire(response.status.as_ref()),
        };
        if !record.status.is_success() {
            return settle(record, ignored);
        }
        let result = response
            .rule
            .as_ref()
            .ok_or(FormatError::Missing("firewall rule"))
            .and_then(FirewallRuleSpec::try_from)
            .map(|spec| record.spec = Some(spec));
        converted(record, result)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn delete_firewall_rule(
        &self,
        interface_id: &str,
        rule_id: &str,
        ignored: Option<&IgnoredCodes>,
    ) -> ClientResult<FirewallRule> {
        let meta = rule_meta(interface_id, rule_id);
        let response = self
            .transport
            .delete_firewall_rule(firewall::delete_request(&meta))
            .await
            .map_err(transport_failure)?;
        settle(
            FirewallRule {
                meta,
                spec: None,
                status: status_from_wire(response.status.as_ref()),
            },
            ignored,
        )
    }
}
