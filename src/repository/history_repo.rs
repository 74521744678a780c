use crate::domain::history::HistoryRecord;
use crate::repository::error::{RepositoryError, RepositoryResult};
use serde::Serialize;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

/// CSV 导出行（列顺序即导出列顺序）
#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    transformer_id: &'a str,
    #[serde(rename = "CH4_pct")]
    ch4_pct: f64,
    #[serde(rename = "C2H4_pct")]
    c2h4_pct: f64,
    #[serde(rename = "C2H2_pct")]
    c2h2_pct: f64,
    #[serde(rename = "Code")]
    code: &'a str,
    #[serde(rename = "Diagnosis")]
    diagnosis: &'a str,
}

impl<'a> From<&'a HistoryRecord> for CsvRow<'a> {
    fn from(r: &'a HistoryRecord) -> Self {
        Self {
            transformer_id: &r.transformer_id,
            ch4_pct: r.ch4_pct,
            c2h4_pct: r.c2h4_pct,
            c2h2_pct: r.c2h2_pct,
            code: r.zone.as_str(),
            diagnosis: &r.fault_name,
        }
    }
}

// ==========================================
// SessionHistoryRepository - 会话历史仓储
// ==========================================
// 红线: 只追加,不修改、不删除; 生命周期 = 单个会话
#[derive(Debug, Clone, Default)]
pub struct SessionHistoryRepository {
    records: Arc<Mutex<Vec<HistoryRecord>>>,
}

impl SessionHistoryRepository {
    /// 创建空的会话历史
    pub fn new() -> Self {
        Self::default()
    }

    fn get_log(&self) -> RepositoryResult<MutexGuard<'_, Vec<HistoryRecord>>> {
        self.records
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    // ==========================================
    // 写入操作
    // ==========================================

    /// 追加一条记录
    ///
    /// # 返回
    /// - `Ok(record_id)`
    pub fn append(&self, record: HistoryRecord) -> RepositoryResult<String> {
        if record.transformer_id.trim().is_empty() {
            return Err(RepositoryError::FieldValueError {
                field: "transformer_id".to_string(),
                message: "变压器标识不能为空".to_string(),
            });
        }

        let id = record.record_id.clone();
        let mut log = self.get_log()?;
        log.push(record);
        info!(record_id = %id, total = log.len(), "会话历史已追加");
        Ok(id)
    }

    // ==========================================
    // 查询操作
    // ==========================================

    /// 全部记录（按追加顺序）
    pub fn list(&self) -> RepositoryResult<Vec<HistoryRecord>> {
        Ok(self.get_log()?.clone())
    }

    /// 某台变压器的记录
    pub fn list_by_transformer(&self, transformer_id: &str) -> RepositoryResult<Vec<HistoryRecord>> {
        Ok(self
            .get_log()?
            .iter()
            .filter(|r| r.transformer_id == transformer_id)
            .cloned()
            .collect())
    }

    pub fn len(&self) -> RepositoryResult<usize> {
        Ok(self.get_log()?.len())
    }

    pub fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.get_log()?.is_empty())
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 导出为 CSV
    ///
    /// 列: ID, CH4_pct, C2H4_pct, C2H2_pct, Code, Diagnosis
    pub fn export_csv<W: Write>(&self, writer: W) -> RepositoryResult<usize> {
        let log = self.get_log()?;
        let mut wtr = csv::Writer::from_writer(writer);
        if log.is_empty() {
            wtr.write_record(["ID", "CH4_pct", "C2H4_pct", "C2H2_pct", "Code", "Diagnosis"])?;
        }
        for record in log.iter() {
            wtr.serialize(CsvRow::from(record))?;
        }
        wtr.flush()?;
        Ok(log.len())
    }

    /// 导出为 CSV 字符串 (UTF-8)
    pub fn export_csv_string(&self) -> RepositoryResult<String> {
        let mut buffer = Vec::new();
        self.export_csv(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| RepositoryError::EncodingError(e.to_string()))
    }
}
