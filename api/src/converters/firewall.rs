// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use super::address::{
    enum_from_wire, id_from_wire, id_to_wire, prefix_to_wire, required_prefix_from_wire,
};
use crate::firewall::{
    FirewallAction, FirewallRule, FirewallRuleListMeta, FirewallRuleMeta, FirewallRuleSpec,
    PortFilter, ProtocolFilter, TrafficDirection,
};
use crate::{FormatError, Status};
use proto::protocol_filter::Filter;

impl From<FirewallAction> for proto::FirewallAction {
    fn from(action: FirewallAction) -> Self {
        match action {
            FirewallAction::Drop => proto::FirewallAction::Drop,
            FirewallAction::Accept => proto::FirewallAction::Accept,
        }
    }
}

impl From<proto::FirewallAction> for FirewallAction {
    fn from(action: proto::FirewallAction) -> Self {
        match action {
            proto::FirewallAction::Drop => FirewallAction::Drop,
            proto::FirewallAction::Accept => FirewallAction::Accept,
        }
    }
}

impl From<TrafficDirection> for proto::TrafficDirection {
    fn from(direction: TrafficDirection) -> Self {
        match direction {
            TrafficDirection::Ingress => proto::TrafficDirection::Ingress,
            TrafficDirection::Egress => proto::TrafficDirection::Egress,
        }
    }
}

impl From<proto::TrafficDirection> for TrafficDirection {
    fn from(direction: proto::TrafficDirection) -> Self {
        match direction {
            proto::TrafficDirection::Ingress => TrafficDirection::Ingress,
            proto::TrafficDirection::Egress => TrafficDirection::Egress,
        }
    }
}

impl From<&ProtocolFilter> for proto::ProtocolFilter {
    fn from(filter: &ProtocolFilter) -> Self {
        let filter = match *filter {
            ProtocolFilter::Icmp {
                icmp_type,
                icmp_code,
            } => Filter::Icmp(proto::IcmpFilter {
                icmp_type,
                icmp_code,
            }),
            ProtocolFilter::Tcp(ports) => Filter::Tcp(proto::TcpFilter {
                src_port_lower: ports.src_port_lower,
                src_port_upper: ports.src_port_upper,
                dst_port_lower: ports.dst_port_lower,
                dst_port_upper: ports.dst_port_upper,
            }),
            ProtocolFilter::Udp(ports) => Filter::Udp(proto::UdpFilter {
                src_port_lower: ports.src_port_lower,
                src_port_upper: ports.src_port_upper,
                dst_port_lower: ports.dst_port_lower,
                dst_port_upper: ports.dst_port_upper,
            }),
        };
        proto::ProtocolFilter {
            filter: Some(filter),
        }
    }
}

fn protocol_filter_from_wire(filter: &proto::ProtocolFilter) -> Option<ProtocolFilter> {
    filter.filter.as_ref().map(|filter| match filter {
        Filter::Icmp(icmp) => ProtocolFilter::Icmp {
            icmp_type: icmp.icmp_type,
            icmp_code: icmp.icmp_code,
        },
        Filter::Tcp(tcp) => ProtocolFilter::Tcp(PortFilter {
            src_port_lower: tcp.src_port_lower,
            src_port_upper: tcp.src_port_upper,
            dst_port_lower: tcp.dst_port_lower,
            dst_port_upper: tcp.dst_port_upper,
        }),
        Filter::Udp(udp) => ProtocolFilter::Udp(PortFilter {
            src_port_lower: udp.src_port_lower,
            src_port_upper: udp.src_port_upper,
            dst_port_lower: udp.dst_port_lower,
            dst_port_upper: udp.dst_port_upper,
        }),
    })
}

fn rule_to_wire(meta: &FirewallRuleMeta, spec: &FirewallRuleSpec) -> proto::FirewallRule {
    proto::FirewallRule {
        id: id_to_wire(&meta.rule_id),
        direction: proto::TrafficDirection::from(spec.direction).into(),
        action: proto::FirewallAction::from(spec.action).into(),
        priority: spec.priority,
        source_prefix: Some(prefix_to_wire(&spec.source_prefix)),
        destination_prefix: Some(prefix_to_wire(&spec.destination_prefix)),
        protocol_filter: spec.protocol_filter.as_ref().map(proto::ProtocolFilter::from),
    }
}

pub fn list_request(meta: &FirewallRuleListMeta) -> proto::ListFirewallRulesRequest {
    proto::ListFirewallRulesRequest {
        interface_id: id_to_wire(&meta.interface_id),
    }
}

pub fn create_request(
    meta: &FirewallRuleMeta,
    spec: &FirewallRuleSpec,
) -> proto::CreateFirewallRuleRequest {
    proto::CreateFirewallRuleRequest {
        interface_id: id_to_wire(&meta.interface_id),
        rule: Some(rule_to_wire(meta, spec)),
    }
}

pub fn get_request(meta: &FirewallRuleMeta) -> proto::GetFirewallRuleRequest {
    proto::GetFirewallRuleRequest {
        interface_id: id_to_wire(&meta.interface_id),
        rule_id: id_to_wire(&meta.rule_id),
    }
}

pub fn delete_request(meta: &FirewallRuleMeta) -> proto::DeleteFirewallRuleRequest {
    proto::DeleteFirewallRuleRequest {
        interface_id: id_to_wire(&meta.interface_id),
        rule_id: id_to_wire(&meta.rule_id),
    }
}

impl TryFrom<&proto::FirewallRule> for FirewallRuleSpec {
    type Error = FormatError;

    fn try_from(rule: &proto::FirewallRule) -> Result<Self, Self::Error> {
        let direction: proto::TrafficDirection =
            enum_from_wire("traffic direction", rule.direction)?;
        let action: proto::FirewallAction = enum_from_wire("firewall action", rule.action)?;
        Ok(FirewallRuleSpec {
            direction: direction.into(),
            action: action.into(),
            priority: rule.priority,
            source_prefix: required_prefix_from_wire("source prefix", rule.source_prefix.as_ref())?,
            destination_prefix: required_prefix_from_wire(
                "destination prefix",
                rule.destination_prefix.as_ref(),
            )?,
            protocol_filter: rule
                .protocol_filter
                .as_ref()
                .and_then(protocol_filter_from_wire),
        })
    }
}

/// A rule as returned by the dataplane, which names the rule but not the interface it is attached
/// to.
pub fn rule_from_wire(
    interface_id: &str,
    rule: &proto::FirewallRule,
) -> Result<FirewallRule, FormatError> {
    Ok(FirewallRule {
        meta: FirewallRuleMeta {
            interface_id: interface_id.to_owned(),
            rule_id: id_from_wire("rule id", &rule.id)?,
        },
        spec: Some(FirewallRuleSpec::try_from(rule)?),
        status: Status::default(),
    })
}
