// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Messages and enumerations shared by several operations.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Status {
    #[prost(uint32, tag = "1")]
    pub code: u32,
    #[prost(string, tag = "2")]
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum IpVersion {
    Ipv4 = 0,
    Ipv6 = 1,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IpAddress {
    #[prost(enumeration = "IpVersion", tag = "1")]
    pub ipver: i32,
    /// Textual form of the address
    #[prost(bytes = "vec", tag = "2")]
    pub address: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Prefix {
    #[prost(message, optional, tag = "1")]
    pub ip: Option<IpAddress>,
    #[prost(uint32, tag = "2")]
    pub length: u32,
    #[prost(bytes = "vec", tag = "3")]
    pub underlay_route: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IpConfig {
    #[prost(bytes = "vec", tag = "1")]
    pub primary_address: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PxeConfig {
    #[prost(string, tag = "1")]
    pub next_server: String,
    #[prost(string, tag = "2")]
    pub boot_filename: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VirtualFunction {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(uint32, tag = "2")]
    pub domain: u32,
    #[prost(uint32, tag = "3")]
    pub bus: u32,
    #[prost(uint32, tag = "4")]
    pub slot: u32,
    #[prost(uint32, tag = "5")]
    pub function: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum InterfaceType {
    Virtual = 0,
    Bridged = 1,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Interface {
    #[prost(bytes = "vec", tag = "1")]
    pub id: Vec<u8>,
    #[prost(uint32, tag = "2")]
    pub vni: u32,
    #[prost(bytes = "vec", tag = "3")]
    pub primary_ipv4: Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub primary_ipv6: Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    pub underlay_route: Vec<u8>,
    #[prost(message, optional, tag = "6")]
    pub vf: Option<VirtualFunction>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Route {
    #[prost(message, optional, tag = "1")]
    pub prefix: Option<Prefix>,
    #[prost(uint32, tag = "2")]
    pub nexthop_vni: u32,
    #[prost(message, optional, tag = "3")]
    pub nexthop_address: Option<IpAddress>,
    #[prost(uint32, tag = "4")]
    pub weight: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Protocol {
    Undefined = 0,
    Icmp = 1,
    Tcp = 6,
    Udp = 17,
    Icmpv6 = 58,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LbPort {
    #[prost(uint32, tag = "1")]
    pub port: u32,
    #[prost(enumeration = "Protocol", tag = "2")]
    pub protocol: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NatEntry {
    #[prost(message, optional, tag = "1")]
    pub nat_ip: Option<IpAddress>,
    #[prost(uint32, tag = "2")]
    pub min_port: u32,
    #[prost(uint32, tag = "3")]
    pub max_port: u32,
    #[prost(bytes = "vec", tag = "4")]
    pub underlay_route: Vec<u8>,
    #[prost(uint32, tag = "5")]
    pub vni: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TrafficDirection {
    Ingress = 0,
    Egress = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FirewallAction {
    Drop = 0,
    Accept = 1,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IcmpFilter {
    #[prost(int32, tag = "1")]
    pub icmp_type: i32,
    #[prost(int32, tag = "2")]
    pub icmp_code: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TcpFilter {
    #[prost(int32, tag = "1")]
    pub src_port_lower: i32,
    #[prost(int32, tag = "2")]
    pub src_port_upper: i32,
    #[prost(int32, tag = "3")]
    pub dst_port_lower: i32,
    #[prost(int32, tag = "4")]
    pub dst_port_upper: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UdpFilter {
    #[prost(int32, tag = "1")]
    pub src_port_lower: i32,
    #[prost(int32, tag = "2")]
    pub src_port_upper: i32,
    #[prost(int32, tag = "3")]
    pub dst_port_lower: i32,
    #[prost(int32, tag = "4")]
    pub dst_port_upper: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtocolFilter {
    #[prost(oneof = "protocol_filter::Filter", tags = "1, 2, 3")]
    pub filter: Option<protocol_filter::Filter>,
}

pub mod protocol_filter {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Filter {
        #[prost(message, tag = "1")]
        Icmp(super::IcmpFilter),
        #[prost(message, tag = "2")]
        Tcp(super::TcpFilter),
        #[prost(message, tag = "3")]
        Udp(super::UdpFilter),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FirewallRule {
    #[prost(bytes = "vec", tag = "1")]
    pub id: Vec<u8>,
    #[prost(enumeration = "TrafficDirection", tag = "2")]
    pub direction: i32,
    #[prost(enumeration = "FirewallAction", tag = "3")]
    pub action: i32,
    #[prost(uint32, tag = "4")]
    pub priority: u32,
    #[prost(message, optional, tag = "5")]
    pub source_prefix: Option<Prefix>,
    #[prost(message, optional, tag = "6")]
    pub destination_prefix: Option<Prefix>,
    #[prost(message, optional, tag = "7")]
    pub protocol_filter: Option<ProtocolFilter>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum VniType {
    VniIpv4 = 0,
    VniIpv6 = 1,
    VniBoth = 2,
}
