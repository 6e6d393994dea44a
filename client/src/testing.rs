// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! A scripted [`Transport`] for tests.
//!
//! Replies are queued per operation and handed out in order. An operation without a queued reply
//! answers with a default (successful, empty) response. Every issued request is recorded.

use async_trait::async_trait;
use std::any::Any;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};
use tonic::Status;

use crate::transport::Transport;

type Reply = Result<Box<dyn Any + Send>, Status>;

#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<&'static str, VecDeque<Reply>>>,
    calls: Mutex<Vec<(&'static str, Box<dyn Any + Send>)>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, op: &'static str, reply: Reply) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(op)
            .or_default()
            .push_back(reply);
    }

    /// Queue a reply for the next call to `op`.
    pub fn reply<T: Any + Send>(&self, op: &'static str, response: T) {
        self.push(op, Ok(Box::new(response)));
    }

    /// Make the next call to `op` fail in transport.
    pub fn fail(&self, op: &'static str, status: Status) {
        self.push(op, Err(status));
    }

    /// Names of the operations issued so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(op, _)| *op)
            .collect()
    }

    /// The requests issued to `op` so far, in order.
    #[must_use]
    pub fn requests<T: Any + Clone>(&self, op: &str) -> Vec<T> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(name, _)| *name == op)
            .filter_map(|(_, request)| request.downcast_ref::<T>().cloned())
            .collect()
    }

    fn call<Q, R>(&self, op: &'static str, request: Q) -> Result<R, Status>
    where
        Q: Any + Send,
        R: Any + Default,
    {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((op, Box::new(request)));
        let reply = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(op)
            .and_then(VecDeque::pop_front);
        match reply {
            None => Ok(R::default()),
            Some(Err(status)) => Err(status),
            Some(Ok(response)) => response
                .downcast::<R>()
                .map(|response| *response)
                .map_err(|_| Status::internal(format!("queued reply for {op} has the wrong type"))),
        }
    }
}

macro_rules! mock_ops {
    ($($op:ident: $request:ty => $response:ty),* $(,)?) => {
        #[async_trait]
        impl Transport for MockTransport {
            $(
                async fn $op(&self, request: $request) -> Result<$response, Status> {
                    self.call(stringify!($op), request)
                }
            )*
        }
    };
}

mock_ops! {
    get_load_balancer: proto::GetLoadBalancerRequest => proto::GetLoadBalancerResponse,
    create_load_balancer: proto::CreateLoadBalancerRequest => proto::CreateLoadBalancerResponse,
    delete_load_balancer: proto::DeleteLoadBalancerRequest => proto::DeleteLoadBalancerResponse,
    list_load_balancer_prefixes: proto::ListLoadBalancerPrefixesRequest => proto::ListLoadBalancerPrefixesResponse,
    create_load_balancer_prefix: proto::CreateLoadBalancerPrefixRequest => proto::CreateLoadBalancerPrefixResponse,
    delete_load_balancer_prefix: proto::DeleteLoadBalancerPrefixRequest => proto::DeleteLoadBalancerPrefixResponse,
    list_load_balancer_targets: proto::ListLoadBalancerTargetsRequest => proto::ListLoadBalancerTargetsResponse,
    create_load_balancer_target: proto::CreateLoadBalancerTargetRequest => proto::CreateLoadBalancerTargetResponse,
    delete_load_balancer_target: proto::DeleteLoadBalancerTargetRequest => proto::DeleteLoadBalancerTargetResponse,
    get_interface: proto::GetInterfaceRequest => proto::GetInterfaceResponse,
    list_interfaces: proto::ListInterfacesRequest => proto::ListInterfacesResponse,
    create_interface: proto::CreateInterfaceRequest => proto::CreateInterfaceResponse,
    delete_interface: proto::DeleteInterfaceRequest => proto::DeleteInterfaceResponse,
    get_vip: proto::GetVipRequest => proto::GetVipResponse,
    create_vip: proto::CreateVipRequest => proto::CreateVipResponse,
    delete_vip: proto::DeleteVipRequest => proto::DeleteVipResponse,
    list_prefixes: proto::ListPrefixesRequest => proto::ListPrefixesResponse,
    create_prefix: proto::CreatePrefixRequest => proto::CreatePrefixResponse,
    delete_prefix: proto::DeletePrefixRequest => proto::DeletePrefixResponse,
    list_routes: proto::ListRoutesRequest => proto::ListRoutesResponse,
    create_route: proto::CreateRouteRequest => proto::CreateRouteResponse,
    delete_route: proto::DeleteRouteRequest => proto::DeleteRouteResponse,
    get_nat: proto::GetNatRequest => proto::GetNatResponse,
    create_nat: proto::CreateNatRequest => proto::CreateNatResponse,
    delete_nat: proto::DeleteNatRequest => proto::DeleteNatResponse,
    list_local_nats: proto::ListLocalNatsRequest => proto::ListLocalNatsResponse,
    list_neighbor_nats: proto::ListNeighborNatsRequest => proto::ListNeighborNatsResponse,
    create_neighbor_nat: proto::CreateNeighborNatRequest => proto::CreateNeighborNatResponse,
    delete_neighbor_nat: proto::DeleteNeighborNatRequest => proto::DeleteNeighborNatResponse,
    list_firewall_rules: proto::ListFirewallRulesRequest => proto::ListFirewallRulesResponse,
    create_firewall_rule: proto::CreateFirewallRuleRequest => proto::CreateFirewallRuleResponse,
    get_firewall_rule: proto::GetFirewallRuleRequest => proto::GetFirewallRuleResponse,
    delete_firewall_rule: proto::DeleteFirewallRuleRequest => proto::DeleteFirewallRuleResponse,
    check_initialized: proto::CheckInitializedRequest => proto::CheckInitializedResponse,
    initialize: proto::InitializeRequest => proto::InitializeResponse,
    check_vni_in_use: proto::CheckVniInUseRequest => proto::CheckVniInUseResponse,
    reset_vni: proto::ResetVniRequest => proto::ResetVniResponse,
    get_version: proto::GetVersionRequest => proto::GetVersionResponse,
}
