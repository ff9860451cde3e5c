//! 타깃 플랫폼 모델.
//!
//! 3개 고정 플랫폼(douyin, xiaohongshu, wechat)의 정적 디스크립터.
//! 프로세스 수명 동안 불변.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::models::media::MediaKind;

/// 플랫폼 식별자 (와이어 포맷: 소문자 id)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    /// 抖音 — 세로 숏폼 비디오
    Douyin,
    /// 小红书 — 이미지/비디오 갤러리
    Xiaohongshu,
    /// 视频号 — 가로/세로 비디오
    Wechat,
}

impl PlatformId {
    /// 전체 플랫폼 목록 (UI 탭 순서)
    pub const ALL: [PlatformId; 3] = [
        PlatformId::Douyin,
        PlatformId::Xiaohongshu,
        PlatformId::Wechat,
    ];

    /// 와이어/저장소에서 쓰는 소문자 id
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformId::Douyin => "douyin",
            PlatformId::Xiaohongshu => "xiaohongshu",
            PlatformId::Wechat => "wechat",
        }
    }

    /// 정적 디스크립터 조회
    pub fn descriptor(&self) -> &'static Platform {
        match self {
            PlatformId::Douyin => &PLATFORMS[0],
            PlatformId::Xiaohongshu => &PLATFORMS[1],
            PlatformId::Wechat => &PLATFORMS[2],
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "douyin" => Ok(PlatformId::Douyin),
            "xiaohongshu" => Ok(PlatformId::Xiaohongshu),
            "wechat" => Ok(PlatformId::Wechat),
            other => Err(CoreError::NotFound {
                resource_type: "Platform".to_string(),
                id: other.to_string(),
            }),
        }
    }
}

/// 플랫폼 정적 디스크립터
///
/// 표시 이름, 브랜드/액센트 색상, 업로드 안내 문구, 허용 미디어 종류.
#[derive(Debug)]
pub struct Platform {
    /// 플랫폼 id
    pub id: PlatformId,
    /// 표시 이름 (중국어 제품 문자열)
    pub name: &'static str,
    /// 브랜드 색상 (#RRGGBB)
    pub color: &'static str,
    /// 액센트 색상 (#RRGGBB)
    pub accent: &'static str,
    /// 업로드 영역 안내 문구
    pub upload_text: &'static str,
    /// 허용되는 미디어 종류
    pub accepts: &'static [MediaKind],
}

impl Platform {
    /// 해당 미디어 종류를 업로드할 수 있는지
    pub fn accepts(&self, kind: MediaKind) -> bool {
        self.accepts.contains(&kind)
    }
}

/// 고정 플랫폼 테이블 — 순서는 [`PlatformId::ALL`]과 동일
static PLATFORMS: [Platform; 3] = [
    Platform {
        id: PlatformId::Douyin,
        name: "抖音",
        color: "#000000",
        accent: "#22d3ee",
        upload_text: "上传短视频 (MP4/MOV)",
        accepts: &[MediaKind::Video],
    },
    Platform {
        id: PlatformId::Xiaohongshu,
        name: "小红书",
        color: "#ff2442",
        accent: "#ff2442",
        upload_text: "上传图片或视频",
        accepts: &[MediaKind::Video, MediaKind::Image],
    },
    Platform {
        id: PlatformId::Wechat,
        name: "视频号",
        color: "#07c160",
        accent: "#07c160",
        upload_text: "上传横屏/竖屏视频",
        accepts: &[MediaKind::Video],
    },
];
