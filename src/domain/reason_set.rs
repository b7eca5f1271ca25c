// ==========================================
// 运单 ETA 风险分类器 - 风险原因集合
// ==========================================
// 只追加的有序集合: 每种原因至多出现一次，顺序为首次追加顺序
// ==========================================

use crate::domain::types::ReasonCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReasonSet {
    codes: Vec<ReasonCode>,
}

impl ReasonSet {
    pub fn new() -> Self {
        Self { codes: Vec::new() }
    }

    /// 追加原因码
    ///
    /// # 返回
    /// - true: 新增
    /// - false: 已存在，忽略
    pub fn push(&mut self, code: ReasonCode) -> bool {
        if self.codes.contains(&code) {
            return false;
        }
        self.codes.push(code);
        true
    }

    pub fn contains(&self, code: ReasonCode) -> bool {
        self.codes.contains(&code)
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ReasonCode> + '_ {
        self.codes.iter().copied()
    }

    pub fn as_slice(&self) -> &[ReasonCode] {
        &self.codes
    }

    /// 机器可读代码列表
    pub fn codes(&self) -> Vec<&'static str> {
        self.codes.iter().map(|c| c.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a ReasonSet {
    type Item = &'a ReasonCode;
    type IntoIter = std::slice::Iter<'a, ReasonCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
