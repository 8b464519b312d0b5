//! Catalogue of remote procedures exposed by the engine.

use std::fmt;
use std::str::FromStr;


/// Remote procedure name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `balance.query`: available and frozen balances per asset.
    BalanceQuery,
    /// `balance.update`: deposit, withdraw or adjust a balance.
    BalanceUpdate,
    /// `balance.history`: balance change history for an asset.
    BalanceHistory,
    /// `asset.list`: supported assets.
    AssetList,
    /// `asset.summary`: totals per asset.
    AssetSummary,
    /// `order.put_limit`: place a limit order.
    OrderPutLimit,
    /// `order.put_market`: place a market order.
    OrderPutMarket,
    /// `order.cancel`: cancel a pending order.
    OrderCancel,
    /// `order.book`: one side of the order book.
    OrderBook,
    /// `order.depth`: merged order book depth.
    OrderDepth,
    /// `order.pending`: a user's pending orders.
    OrderPending,
    /// `order.pending_detail`: a single pending order.
    OrderPendingDetail,
    /// `order.deals`: executions of an order.
    OrderDeals,
    /// `order.finished`: a user's finished orders.
    OrderFinished,
    /// `order.finished_detail`: a single finished order.
    OrderFinishedDetail,
    /// `market.last`: last traded price.
    MarketLast,
    /// `market.summary`: per-market summary.
    MarketSummary,
    /// `market.list`: configured markets.
    MarketList,
    /// `market.deals`: latest executions in a market.
    MarketDeals,
    /// `market.user_deals`: a user's executions in a market.
    MarketUserDeals,
    /// `market.kline`: candlestick data.
    MarketKLine,
    /// `market.status`: market statistics over a period.
    MarketStatus,
    /// `market.status_today`: market statistics for the current day.
    MarketStatusToday,
}

impl Method {
    /// Every method in the catalogue.
    pub const ALL: [Method; 23] = [
        Self::BalanceQuery,
        Self::BalanceUpdate,
        Self::BalanceHistory,
        Self::AssetList,
        Self::AssetSummary,
        Self::OrderPutLimit,
        Self::OrderPutMarket,
        Self::OrderCancel,
        Self::OrderBook,
        Self::OrderDepth,
        Self::OrderPending,
        Self::OrderPendingDetail,
        Self::OrderDeals,
        Self::OrderFinished,
        Self::OrderFinishedDetail,
        Self::MarketLast,
        Self::MarketSummary,
        Self::MarketList,
        Self::MarketDeals,
        Self::MarketUserDeals,
        Self::MarketKLine,
        Self::MarketStatus,
        Self::MarketStatusToday,
    ];

    /// Wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BalanceQuery => "balance.query",
            Self::BalanceUpdate => "balance.update",
            Self::BalanceHistory => "balance.history",
            Self::AssetList => "asset.list",
            Self::AssetSummary => "asset.summary",
            Self::OrderPutLimit => "order.put_limit",
            Self::OrderPutMarket => "order.put_market",
            Self::OrderCancel => "order.cancel",
            Self::OrderBook => "order.book",
            Self::OrderDepth => "order.depth",
            Self::OrderPending => "order.pending",
            Self::OrderPendingDetail => "order.pending_detail",
            Self::OrderDeals => "order.deals",
            Self::OrderFinished => "order.finished",
            Self::OrderFinishedDetail => "order.finished_detail",
            Self::MarketLast => "market.last",
            Self::MarketSummary => "market.summary",
            Self::MarketList => "market.list",
            Self::MarketDeals => "market.deals",
            Self::MarketUserDeals => "market.user_deals",
            Self::MarketKLine => "market.kline",
            Self::MarketStatus => "market.status",
            Self::MarketStatusToday => "market.status_today",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// Name that is not part of the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown method: {0}")]
pub struct UnknownMethod(pub String);
