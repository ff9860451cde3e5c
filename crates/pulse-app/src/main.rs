//! # pulse-app
//!
//! Traffic Pulse CLI 진입점.
//! DI 컨테이너 역할 — 설정 로드, 어댑터 조립, 세션 구동.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pulse_core::config_manager::ConfigManager;
use pulse_core::models::lifecycle::LifecycleState;
use pulse_core::models::media::MediaSelection;
use pulse_core::models::platform::PlatformId;
use pulse_network::analysis_client::HttpAnalysisClient;
use pulse_session::presenter::{StrategyPanel, StrategyView};
use pulse_session::{project, AnalysisLifecycle};
use pulse_storage::{JsonHistoryStore, PreviewCache};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Traffic Pulse 클라이언트
///
/// 이미지/비디오를 분석 서비스에 업로드하고 플랫폼별 콘텐츠 전략을 받는다
#[derive(Parser, Debug)]
#[command(name = "pulse")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 분석 서비스 URL 지정 (기본: 설정 파일 값)
    #[arg(long, short = 's')]
    server: Option<String>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,

    /// 설정 파일 경로 (기본: 플랫폼별 설정 디렉토리)
    #[arg(long)]
    config: Option<PathBuf>,

    /// 데이터 저장 경로 (이력 파일, 미리보기 캐시)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 파일을 업로드하고 플랫폼 전략을 받는다
    Analyze {
        /// 분석할 이미지/비디오 파일
        file: PathBuf,

        /// 타깃 플랫폼 (douyin, xiaohongshu, wechat)
        #[arg(long, short = 'p', default_value = "xiaohongshu")]
        platform: PlatformId,
    },

    /// 분석 이력 조회/관리
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// 지원 플랫폼 목록 출력
    Platforms,
}

#[derive(Subcommand, Debug)]
enum HistoryAction {
    /// 이력 목록 (최신 우선)
    List,

    /// 저장된 결과 재표시 — 네트워크 호출 없음
    Show {
        /// 이력 항목 id
        id: i64,
    },

    /// 이력 항목 삭제
    Delete {
        /// 이력 항목 id
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_filter = format!(
        "pulse={lvl},pulse_app={lvl},pulse_core={lvl},pulse_network={lvl},pulse_storage={lvl},pulse_session={lvl}",
        lvl = args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    // 설정 로드 (없으면 기본 설정 파일 생성)
    let config_manager = match &args.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    }
    .context("설정 로드 실패")?;
    let mut config = config_manager.get();

    if let Some(server) = &args.server {
        config.server.base_url = server.clone();
    }

    // 데이터 디렉토리: CLI 인자 > 설정 파일 > 플랫폼 기본 경로
    let data_dir = match args.data_dir.clone().or(config.storage.data_dir.clone()) {
        Some(dir) => dir,
        None => ConfigManager::data_dir().context("데이터 디렉토리 결정 실패")?,
    };

    let history = Arc::new(
        JsonHistoryStore::open(data_dir.join(&config.storage.history_file))
            .await
            .context("이력 저장소 열기 실패")?,
    );

    let client = Arc::new(
        HttpAnalysisClient::new(&config.server.base_url, config.server.timeout())
            .context("분석 클라이언트 생성 실패")?
            .with_analyze_path(&config.server.analyze_path),
    );

    let mut session = AnalysisLifecycle::new(client, history);

    match args.command {
        Command::Analyze { file, platform } => {
            let preview_cache = PreviewCache::new(data_dir.join(&config.storage.preview_dir))
                .await
                .context("미리보기 캐시 초기화 실패")?;

            // 이전 실행이 남긴 고아 미리보기 정리
            if let Err(e) = preview_cache.sweep().await {
                warn!("미리보기 캐시 정리 실패: {e}");
            }

            run_analyze(&mut session, &preview_cache, &file, platform).await?;
        }
        Command::History { action } => match action {
            HistoryAction::List => print_history(&session).await,
            HistoryAction::Show { id } => {
                session
                    .restore(id)
                    .await
                    .with_context(|| format!("이력 복원 실패: id={id}"))?;
                let selection = session.selection().context("복원된 선택 없음")?;
                println!();
                println!("📂 {} ({})", selection.file_name, session.platform());
                print_panel(&project(session.result(), session.platform()));
            }
            HistoryAction::Delete { id } => {
                session.delete_history(id).await.context("이력 삭제 실패")?;
                println!("🗑️  삭제 완료: id={id}");
            }
        },
        Command::Platforms => print_platforms(),
    }

    Ok(())
}

/// 업로드 → 분석 → 결과 출력 → 이력 저장
async fn run_analyze(
    session: &mut AnalysisLifecycle,
    preview_cache: &PreviewCache,
    file: &PathBuf,
    platform: PlatformId,
) -> Result<()> {
    session.set_platform(platform);

    let preview = preview_cache
        .stage(file)
        .await
        .with_context(|| format!("파일 접근 실패: {}", file.display()))?;
    let selection = MediaSelection::from_path(file)?.with_preview(preview);

    session.select_file(selection)?;
    session.start_analysis()?;

    let descriptor = platform.descriptor();
    println!();
    println!("📤 {} → {} 분석 중...", file.display(), descriptor.name);

    session.run_to_completion().await?;

    match session.state() {
        LifecycleState::ResultReady => {
            info!("분석 완료");
            print_panel(&project(session.result(), platform));
        }
        LifecycleState::Failed(msg) => {
            // 즉시 프로세스 종료는 미리보기 핸들 드롭을 건너뛴다.
            // 에러 반환으로 세션 드롭 후 종료 코드 1로 끝난다.
            anyhow::bail!("분석 실패: {msg}");
        }
        other => warn!("예상치 못한 종료 상태: {other:?}"),
    }
    Ok(())
}

/// 이력 목록 출력 (최신 우선)
async fn print_history(session: &AnalysisLifecycle) {
    let entries = session.history_entries().await;
    if entries.is_empty() {
        println!("이력이 없습니다.");
        return;
    }

    println!();
    for entry in entries {
        println!(
            "  [{}] {} · {} · {}",
            entry.id,
            entry.date,
            entry.platform.descriptor().name,
            entry.file_name
        );
    }
    println!();
}

/// 플랫폼 테이블 출력
fn print_platforms() {
    println!();
    for id in PlatformId::ALL {
        let p = id.descriptor();
        println!("  {} ({}) — {}", p.name, id, p.upload_text);
    }
    println!();
}

/// 전략 패널 출력 — 있는 섹션만 표시한다
fn print_panel(panel: &StrategyPanel) {
    match panel {
        StrategyPanel::Empty => println!("표시할 결과가 없습니다."),
        StrategyPanel::NoPlatformData => {
            println!("该平台暂无策略数据 — 해당 플랫폼 키가 응답에 없습니다.")
        }
        StrategyPanel::Ready(view) => print_view(view),
    }
}

fn print_view(view: &StrategyView) {
    if !view.copywriting.is_empty() || view.content.is_some() {
        println!();
        println!("✍️  文案建议");
        for item in &view.copywriting {
            println!("  {} | {}", item.label, item.text);
        }
        if let Some(content) = &view.content {
            println!("  {content}");
        }
    }

    if !view.hashtags.is_empty() {
        println!();
        println!("#️⃣  话题标签");
        println!("  {}", view.hashtags.join(" "));
    }

    if !view.seo_keywords.is_empty() {
        println!();
        println!("🔍 搜索关键词");
        println!("  {}", view.seo_keywords.join(" · "));
    }

    if let Some(trigger) = &view.social_trigger {
        println!();
        println!("💬 社交裂变");
        println!("  {trigger}");
    }

    if let Some(cover) = &view.cover {
        println!();
        println!("🎨 封面设计");
        if let Some(text) = &cover.text {
            println!("  花字: {text}");
        }
        if let Some(layout) = &cover.layout {
            println!("  构图: {layout}");
        }
        if let Some(elements) = &cover.visual_elements {
            println!("  元素: {elements}");
        }
    }

    if let Some(timing) = &view.timing {
        println!();
        println!("⏰ 发布时间雷达");
        println!("  {} — {}", timing.best_time, timing.reason);
    }

    if let Some(ops) = &view.ops {
        println!();
        println!("🚀 运营工具包");
        if let Some(logic) = &ops.core_logic {
            println!("  核心逻辑: {logic}");
        }
        if let Some(tags) = &ops.tags_strategy {
            println!("  标签策略: {tags}");
        }
        if let Some(promotion) = &ops.promotion {
            println!("  投放建议: {promotion}");
        }
        for line in &ops.comment_script {
            println!("  评论话术: {line}");
        }
    }

    if let Some(visual) = &view.visual {
        println!();
        println!("🧠 AI 视觉诊断");
        if let Some(summary) = &visual.summary {
            println!("  {summary}");
        }
        if let Some(emotion) = &visual.emotion {
            println!("  情绪基调: {emotion}");
        }
        if !visual.tags.is_empty() {
            println!("  标签: {}", visual.tags.join(" / "));
        }
        for highlight in &visual.highlights {
            println!("  高光: {highlight}");
        }
    }
    println!();
}
