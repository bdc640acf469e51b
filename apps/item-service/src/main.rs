//! # Item Service サーバー
//!
//! アイテム一覧を公開する読み取り専用の API サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |----------|------|------|
//! | GET | `/items` | 全アイテムの JSON 配列 |
//! | GET | `/health` | ヘルスチェック |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `ITEM_SERVICE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `ITEM_SERVICE_PORT` | **Yes** | ポート番号 |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `RUN_MIGRATIONS` | No | 起動時のマイグレーション適用（デフォルト: `true`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,itemservice=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! ITEM_SERVICE_PORT=3000 DATABASE_URL=postgres://... cargo run -p itemservice-api
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use itemservice_api::{
    build_app,
    config::ItemServiceConfig,
    handler::ItemState,
    usecase::ItemUseCaseImpl,
};
use itemservice_infra::{db, repository::PostgresItemRepository};
use itemservice_shared::observability::{LogFormat, default_directive, init_tracing};
use tokio::{net::TcpListener, signal};

const SERVICE_NAME: &str = "item-service";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(LogFormat::from_env(), &default_directive("itemservice"));
    let _app_span = tracing::info_span!("app", service = SERVICE_NAME).entered();

    let config = ItemServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Item Service サーバーを起動します: {}",
        config.bind_address()
    );

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database_url)
        .await
        .context("データベース接続に失敗しました")?;
    db::ping(&pool)
        .await
        .context("データベースの疎通確認に失敗しました")?;
    tracing::info!("データベースに接続しました");

    if config.run_migrations {
        db::run_migrations(&pool)
            .await
            .context("マイグレーションの適用に失敗しました")?;
        tracing::info!("マイグレーションを適用しました");
    }

    // 依存コンポーネントを初期化
    let item_repository = PostgresItemRepository::new(pool);
    let item_usecase = ItemUseCaseImpl::new(Arc::new(item_repository));
    let item_state = Arc::new(ItemState {
        usecase: Arc::new(item_usecase),
    });

    let app = build_app(item_state);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("{} へのバインドに失敗しました", config.bind_address()))?;
    tracing::info!(
        "Item Service サーバーが起動しました: {}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Item Service サーバーを停止しました");
    Ok(())
}

/// Ctrl+C または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "Ctrl+C ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM ハンドラの登録に失敗しました");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Ctrl+C を受信しました。シャットダウンします"),
        () = terminate => tracing::info!("SIGTERM を受信しました。シャットダウンします"),
    }
}
