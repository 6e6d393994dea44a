// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The remote procedure calls offered by the dataplane.

use async_trait::async_trait;
use tonic::Status;

/// One method per remote operation of the dataplane service. A call either completes with the
/// reply of the dataplane, whatever status code the reply carries, or fails in transport.
///
/// Implementations own the channel to the dataplane, including any deadline or cancellation
/// policy; the client issues every call exactly once.
#[async_trait]
pub trait Transport: Send + Sync {
    /* load balancers */
    async fn get_load_balancer(
        &self,
        request: proto::GetLoadBalancerRequest,
    ) -> Result<proto::GetLoadBalancerResponse, Status>;
    async fn create_load_balancer(
        &self,
        request: proto::CreateLoadBalancerRequest,
    ) -> Result<proto::CreateLoadBalancerResponse, Status>;
    async fn delete_load_balancer(
        &self,
        request: proto::DeleteLoadBalancerRequest,
    ) -> Result<proto::DeleteLoadBalancerResponse, Status>;

    /* load balancer prefixes */
    async fn list_load_balancer_prefixes(
        &self,
        request: proto::ListLoadBalancerPrefixesRequest,
    ) -> Result<proto::ListLoadBalancerPrefixesResponse, Status>;
    async fn create_load_balancer_prefix(
        &self,
        request: proto::CreateLoadBalancerPrefixRequest,
    ) -> Result<proto::CreateLoadBalancerPrefixResponse, Status>;
    async fn delete_load_balancer_prefix(
        &self,
        request: proto::DeleteLoadBalancerPrefixRequest,
    ) -> Result<proto::DeleteLoadBalancerPrefixResponse, Status>;

    /* load balancer targets */
    async fn list_load_balancer_targets(
        &self,
        request: proto::ListLoadBalancerTargetsRequest,
    ) -> Result<proto::ListLoadBalancerTargetsResponse, Status>;
    async fn create_load_balancer_target(
        &self,
        request: proto::CreateLoadBalancerTargetRequest,
    ) -> Result<proto::CreateLoadBalancerTargetResponse, Status>;
    async fn delete_load_balancer_target(
        &self,
        request: proto::DeleteLoadBalancerTargetRequest,
    ) -> Result<proto::DeleteLoadBalancerTargetResponse, Status>;

    /* interfaces */
    async fn get_interface(
        &self,
        request: proto::GetInterfaceRequest,
    ) -> Result<proto::GetInterfaceResponse, Status>;
    async fn list_interfaces(
        &self,
        request: proto::ListInterfacesRequest,
    ) -> Result<proto::ListInterfacesResponse, Status>;
    async fn create_interface(
        &self,
        request: proto::CreateInterfaceRequest,
    ) -> Result<proto::CreateInterfaceResponse, Status>;
    async fn delete_interface(
        &self,
        request: proto::DeleteInterfaceRequest,
    ) -> Result<proto::DeleteInterfaceResponse, Status>;

    /* virtual IPs */
    async fn get_vip(
        &self,
        request: proto::GetVipRequest,
    ) -> Result<proto::GetVipResponse, Status>;
    async fn create_vip(
        &self,
        request: proto::CreateVipRequest,
    ) -> Result<proto::CreateVipResponse, Status>;
    async fn delete_vip(
        &self,
        request: proto::DeleteVipRequest,
    ) -> Result<proto::DeleteVipResponse, Status>;

    /* alias prefixes */
    async fn list_prefixes(
        &self,
        request: proto::ListPrefixesRequest,
    ) -> Result<proto::ListPrefixesResponse, Status>;
    async fn create_prefix(
        &self,
        request: proto::CreatePrefixRequest,
    ) -> Result<proto::CreatePrefixResponse, Status>;
    async fn delete_prefix(
        &self,
        request: proto::DeletePrefixRequest,
    ) -> Result<proto::DeletePrefixResponse, Status>;

    /* routes */
    async fn list_routes(
        &self,
        request: proto::ListRoutesRequest,
    ) -> Result<proto::ListRoutesResponse, Status>;
    async fn create_route(
        &self,
        request: proto::CreateRouteRequest,
    ) -> Result<proto::CreateRouteResponse, Status>;
    async fn delete_route(
        &self,
        request: proto::DeleteRouteRequest,
    ) -> Result<proto::DeleteRouteResponse, Status>;

    /* interface NAT */
    async fn get_nat(
        &self,
        request: proto::GetNatRequest,
    ) -> Result<proto::GetNatResponse, Status>;
    async fn create_nat(
        &self,
        request: proto::CreateNatRequest,
    ) -> Result<proto::CreateNatResponse, Status>;
    async fn delete_nat(
        &self,
        request: proto::DeleteNatRequest,
    ) -> Result<proto::DeleteNatResponse, Status>;
    async fn list_local_nats(
        &self,
        request: proto::ListLocalNatsRequest,
    ) -> Result<proto::ListLocalNatsResponse, Status>;

    /* neighbor NAT */
    async fn list_neighbor_nats(
        &self,
        request: proto::ListNeighborNatsRequest,
    ) -> Result<proto::ListNeighborNatsResponse, Status>;
    async fn create_neighbor_nat(
        &self,
        request: proto::CreateNeighborNatRequest,
    ) -> Result<proto::CreateNeighborNatResponse, Status>;
    async fn delete_neighbor_nat(
        &self,
        request: proto::DeleteNeighborNatRequest,
    ) -> Result<proto::DeleteNeighborNatResponse, Status>;

    /* firewall rules */
    async fn list_firewall_rules(
        &self,
        request: proto::ListFirewallRulesRequest,
    ) -> Result<proto::ListFirewallRulesResponse, Status>;
    async fn create_firewall_rule(
        &self,
        request: proto::CreateFirewallRuleRequest,
    ) -> Result<proto::CreateFirewallRuleResponse, Status>;
    async fn get_firewall_rule(
        &self,
        request: proto::GetFirewallRuleRequest,
    ) -> Result<proto::GetFirewallRuleResponse, Status>;
    async fn delete_firewall_rule(
        &self,
        request: proto::DeleteFirewallRuleRequest,
    ) -> Result<proto::DeleteFirewallRuleResponse, Status>;

    /* service state */
    async fn check_initialized(
        &self,
        request: proto::CheckInitializedRequest,
    ) -> Result<proto::CheckInitializedResponse, Status>;
    async fn initialize(
        &self,
        request: proto::InitializeRequest,
    ) -> Result<proto::InitializeResponse, Status>;
    async fn check_vni_in_use(
        &self,
        request: proto::CheckVniInUseRequest,
    ) -> Result<proto::CheckVniInUseResponse, Status>;
    async fn reset_vni(
        &self,
        request: proto::ResetVniRequest,
    ) -> Result<proto::ResetVniResponse, Status>;
    async fn get_version(
        &self,
        request: proto::GetVersionRequest,
    ) -> Result<proto::GetVersionResponse, Status>;
}
