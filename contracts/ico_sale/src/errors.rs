use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Setup (1–2) ---
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // --- Authorization / guard (3–4) ---
    Unauthorized = 3,
    ReentrantCall = 4,

    // --- Lifecycle (5–11) ---
    InvalidConfig = 5,
    SaleInProgress = 6,
    NotConfigured = 7,
    TooEarly = 8,
    WindowClosed = 9,
    AlreadyLive = 10,
    NotLive = 11,

    // --- Purchase (12–18) ---
    SaleNotLive = 12,
    BelowMinimum = 13,
    AboveMaximum = 14,
    FundingCapExceeded = 15,
    ArithmeticOverflow = 16,
    TransferFailed = 17,
    UnsupportedPaymentAsset = 18,
}
