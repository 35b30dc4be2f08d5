//! 后端协作者
//!
//! 订阅、打赏、私信等操作的接入点。演示版本没有任何后端，
//! `Offline` 总是返回未连接错误，界面据此给出提示。

use crate::error::{Service, TransportError};
use crate::models::{Plan, TipAmount};

pub trait Collaborators {
    fn subscribe(&self, creator: &str, plan: Plan) -> Result<(), TransportError>;
    fn tip(&self, amount: TipAmount) -> Result<(), TransportError>;
    fn send_message(&self, body: &str) -> Result<(), TransportError>;
}

/// 未接入任何服务
#[derive(Debug, Default, Clone, Copy)]
pub struct Offline;

impl Collaborators for Offline {
    fn subscribe(&self, _creator: &str, _plan: Plan) -> Result<(), TransportError> {
        Err(TransportError::NotConnected(Service::Payments))
    }

    fn tip(&self, _amount: TipAmount) -> Result<(), TransportError> {
        Err(TransportError::NotConnected(Service::Payments))
    }

    fn send_message(&self, _body: &str) -> Result<(), TransportError> {
        Err(TransportError::NotConnected(Service::Messaging))
    }
}
