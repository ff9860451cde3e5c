//! 업로드 진행률 스트림.
//!
//! 요청 본문을 고정 크기 청크로 나눠 산출하며, 청크마다
//! `round(sent/total*100)`을 mpsc 채널로 보고한다. 값은 단조
//! 비감소이고 마지막 청크 직후 정확히 100이 보고된다.

use futures::Stream;
use tokio::sync::mpsc;

/// 업로드 청크 크기 (64KB)
pub const CHUNK_SIZE: usize = 64 * 1024;

/// 진행률 계산 — 0바이트 본문은 즉시 100
pub fn percent(sent: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((sent as f64 / total as f64) * 100.0).round() as u8
}

/// 본문 바이트 → 진행률 보고 청크 스트림
///
/// 스트림 소비자(reqwest)가 청크를 당길 때마다 진행률이 전송된다.
/// 수신자가 느리면 send가 대기하므로 업로드에 자연스러운 배압이 걸린다.
/// 빈 본문은 청크 없이 100만 보고한다.
pub fn progress_stream(
    data: Vec<u8>,
    tx: mpsc::Sender<u8>,
) -> impl Stream<Item = Result<Vec<u8>, std::io::Error>> + Send {
    futures::stream::unfold((0usize, data, tx), |(offset, data, tx)| async move {
        let total = data.len();

        if total == 0 {
            if offset == 0 {
                let _ = tx.send(100).await;
            }
            return None;
        }

        if offset >= total {
            return None;
        }

        let end = (offset + CHUNK_SIZE).min(total);
        let chunk = data[offset..end].to_vec();
        let _ = tx.send(percent(end, total)).await;

        Some((Ok(chunk), (end, data, tx)))
    })
}
