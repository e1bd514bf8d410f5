/// 会话快照键
pub fn session_snapshot_key(store_name: &str) -> String {
    format!("session:{}", store_name)
}
