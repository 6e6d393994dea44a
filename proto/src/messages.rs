// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Request and response messages, one pair per remote operation.

use crate::common::{
    FirewallRule, Interface, IpAddress, IpConfig, LbPort, NatEntry, Prefix, PxeConfig, Route,
    Status, VirtualFunction,
};

/* load balancers */

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLoadBalancerRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub loadbalancer_id: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLoadBalancerResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(uint32, tag = "2")]
    pub vni: u32,
    #[prost(message, optional, tag = "3")]
    pub loadbalanced_ip: Option<IpAddress>,
    #[prost(message, repeated, tag = "4")]
    pub loadbalanced_ports: Vec<LbPort>,
    #[prost(bytes = "vec", tag = "5")]
    pub underlay_route: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateLoadBalancerRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub loadbalancer_id: Vec<u8>,
    #[prost(uint32, tag = "2")]
    pub vni: u32,
    #[prost(message, optional, tag = "3")]
    pub loadbalanced_ip: Option<IpAddress>,
    #[prost(message, repeated, tag = "4")]
    pub loadbalanced_ports: Vec<LbPort>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateLoadBalancerResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(bytes = "vec", tag = "2")]
    pub underlay_route: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteLoadBalancerRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub loadbalancer_id: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteLoadBalancerResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
}

/* load balancer prefixes */

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListLoadBalancerPrefixesRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListLoadBalancerPrefixesResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub prefixes: Vec<Prefix>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateLoadBalancerPrefixRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub prefix: Option<Prefix>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateLoadBalancerPrefixResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(bytes = "vec", tag = "2")]
    pub underlay_route: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteLoadBalancerPrefixRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub prefix: Option<Prefix>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteLoadBalancerPrefixResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
}

/* load balancer targets */

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListLoadBalancerTargetsRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub loadbalancer_id: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListLoadBalancerTargetsResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub target_ips: Vec<IpAddress>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateLoadBalancerTargetRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub loadbalancer_id: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub target_ip: Option<IpAddress>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateLoadBalancerTargetResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteLoadBalancerTargetRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub loadbalancer_id: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub target_ip: Option<IpAddress>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteLoadBalancerTargetResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
}

/* interfaces */

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetInterfaceRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetInterfaceResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, optional, tag = "2")]
    pub interface: Option<Interface>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListInterfacesRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListInterfacesResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub interfaces: Vec<Interface>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateInterfaceRequest {
    #[prost(enumeration = "crate::InterfaceType", tag = "1")]
    pub interface_type: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub interface_id: Vec<u8>,
    #[prost(uint32, tag = "3")]
    pub vni: u32,
    #[prost(message, optional, tag = "4")]
    pub ipv4_config: Option<IpConfig>,
    #[prost(message, optional, tag = "5")]
    pub ipv6_config: Option<IpConfig>,
    #[prost(string, tag = "6")]
    pub device_name: String,
    #[prost(message, optional, tag = "7")]
    pub pxe_config: Option<PxeConfig>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateInterfaceResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(bytes = "vec", tag = "2")]
    pub underlay_route: Vec<u8>,
    #[prost(message, optional, tag = "3")]
    pub vf: Option<VirtualFunction>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteInterfaceRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteInterfaceResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
}

/* virtual IPs */

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetVipRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetVipResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, optional, tag = "2")]
    pub vip_ip: Option<IpAddress>,
    #[prost(bytes = "vec", tag = "3")]
    pub underlay_route: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateVipRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub vip_ip: Option<IpAddress>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateVipResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(bytes = "vec", tag = "2")]
    pub underlay_route: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteVipRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteVipResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
}

/* alias prefixes */

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListPrefixesRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListPrefixesResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub prefixes: Vec<Prefix>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreatePrefixRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub prefix: Option<Prefix>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreatePrefixResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(bytes = "vec", tag = "2")]
    pub underlay_route: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeletePrefixRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub prefix: Option<Prefix>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeletePrefixResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
}

/* routes */

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListRoutesRequest {
    #[prost(uint32, tag = "1")]
    pub vni: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListRoutesResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub routes: Vec<Route>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateRouteRequest {
    #[prost(uint32, tag = "1")]
    pub vni: u32,
    #[prost(message, optional, tag = "2")]
    pub route: Option<Route>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateRouteResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteRouteRequest {
    #[prost(uint32, tag = "1")]
    pub vni: u32,
    #[prost(message, optional, tag = "2")]
    pub route: Option<Route>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteRouteResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
}

/* interface NAT */

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetNatRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetNatResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, optional, tag = "2")]
    pub nat_ip: Option<IpAddress>,
    #[prost(uint32, tag = "3")]
    pub min_port: u32,
    #[prost(uint32, tag = "4")]
    pub max_port: u32,
    #[prost(bytes = "vec", tag = "5")]
    pub underlay_route: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateNatRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub nat_ip: Option<IpAddress>,
    #[prost(uint32, tag = "3")]
    pub min_port: u32,
    #[prost(uint32, tag = "4")]
    pub max_port: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateNatResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(bytes = "vec", tag = "2")]
    pub underlay_route: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteNatRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteNatResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListLocalNatsRequest {
    #[prost(message, optional, tag = "1")]
    pub nat_ip: Option<IpAddress>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListLocalNatsResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub nat_entries: Vec<NatEntry>,
}

/* neighbor NAT */

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListNeighborNatsRequest {
    #[prost(message, optional, tag = "1")]
    pub nat_ip: Option<IpAddress>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListNeighborNatsResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub nat_entries: Vec<NatEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateNeighborNatRequest {
    #[prost(message, optional, tag = "1")]
    pub nat_ip: Option<IpAddress>,
    #[prost(uint32, tag = "2")]
    pub vni: u32,
    #[prost(uint32, tag = "3")]
    pub min_port: u32,
    #[prost(uint32, tag = "4")]
    pub max_port: u32,
    #[prost(bytes = "vec", tag = "5")]
    pub underlay_route: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateNeighborNatResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteNeighborNatRequest {
    #[prost(message, optional, tag = "1")]
    pub nat_ip: Option<IpAddress>,
    #[prost(uint32, tag = "2")]
    pub vni: u32,
    #[prost(uint32, tag = "3")]
    pub min_port: u32,
    #[prost(uint32, tag = "4")]
    pub max_port: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteNeighborNatResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
}

/* firewall rules */

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFirewallRulesRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFirewallRulesResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, repeated, tag = "2")]
    pub rules: Vec<FirewallRule>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateFirewallRuleRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub rule: Option<FirewallRule>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateFirewallRuleResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(bytes = "vec", tag = "2")]
    pub rule_id: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFirewallRuleRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub rule_id: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFirewallRuleResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, optional, tag = "2")]
    pub rule: Option<FirewallRule>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteFirewallRuleRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub interface_id: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub rule_id: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteFirewallRuleResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
}

/* service state */

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckInitializedRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckInitializedResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(string, tag = "2")]
    pub uuid: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InitializeRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InitializeResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(string, tag = "2")]
    pub uuid: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckVniInUseRequest {
    #[prost(uint32, tag = "1")]
    pub vni: u32,
    #[prost(enumeration = "crate::VniType", tag = "2")]
    pub vni_type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CheckVniInUseResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(bool, tag = "2")]
    pub in_use: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResetVniRequest {
    #[prost(uint32, tag = "1")]
    pub vni: u32,
    #[prost(enumeration = "crate::VniType", tag = "2")]
    pub vni_type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResetVniResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetVersionRequest {
    #[prost(string, tag = "1")]
    pub client_protocol: String,
    #[prost(string, tag = "2")]
    pub client_name: String,
    #[prost(string, tag = "3")]
    pub client_version: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetVersionResponse {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(string, tag = "2")]
    pub service_protocol: String,
    #[prost(string, tag = "3")]
    pub service_version: String,
}
