// ==========================================
// 短路电流计算器 - 状态通知
// ==========================================
// 职责: 定义通知接收端 trait，实现依赖倒置
// 说明: 引擎分级产出通知，前端/日志各自实现接收端
// ==========================================

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

// ==========================================
// 通知级别
// ==========================================

/// 通知级别
///
/// 引擎的每种状况恰好归入三级之一：
/// - Info: 计算成功
/// - Warning: 可恢复（如某个母线名未匹配到记录）
/// - Error: 致命（终止所属记录集或整个计算）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// 转换为字符串标识
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

/// 一条状态通知
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

// ==========================================
// 通知接收端 Trait
// ==========================================

/// 通知接收端
///
/// 引擎层定义，展示层实现；引擎不关心通知最终去向。
pub trait NotificationSink: Send + Sync {
    /// 接收一条通知
    fn notify(&self, notification: Notification);

    /// 发送成功通知
    fn info(&self, message: String) {
        self.notify(Notification {
            severity: Severity::Info,
            message,
        });
    }

    /// 发送可恢复警告
    fn warning(&self, message: String) {
        self.notify(Notification {
            severity: Severity::Warning,
            message,
        });
    }

    /// 发送致命错误通知
    fn error(&self, message: String) {
        self.notify(Notification {
            severity: Severity::Error,
            message,
        });
    }
}

// ==========================================
// 内置实现
// ==========================================

/// 日志通知接收端
///
/// 按级别写入 tracing 日志，用于 CLI 场景。
#[derive(Debug, Clone, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => tracing::info!("{}", notification.message),
            Severity::Warning => tracing::warn!("{}", notification.message),
            Severity::Error => tracing::error!("{}", notification.message),
        }
    }
}

/// 缓冲通知接收端
///
/// 收集全部通知供调用方读取，用于测试和嵌入场景。
#[derive(Debug, Default)]
pub struct BufferSink {
    buffer: Mutex<Vec<Notification>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取走已收集的通知
    pub fn take(&self) -> Vec<Notification> {
        let mut buffer = self.buffer.lock().expect("通知缓冲锁被毒化");
        std::mem::take(&mut *buffer)
    }

    /// 指定级别的通知条数
    pub fn count(&self, severity: Severity) -> usize {
        self.buffer
            .lock()
            .expect("通知缓冲锁被毒化")
            .iter()
            .filter(|n| n.severity == severity)
            .count()
    }
}

impl NotificationSink for BufferSink {
    fn notify(&self, notification: Notification) {
        self.buffer
            .lock()
            .expect("通知缓冲锁被毒化")
            .push(notification);
    }
}
