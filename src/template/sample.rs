//! Representative payloads for template preview

use super::ModuleType;
use crate::payload::Payload;
use serde_json::json;

/// A filled-in example payload for the module, with amounts and dates
/// already formatted the way the upstream data assembly would supply them.
/// Used by `preview` and by the rendering tests.
pub fn sample_payload(module_type: ModuleType) -> Payload {
    let value = match module_type {
        ModuleType::Sales => json!({
            "companyName": "Meridian Trading Co.",
            "tagline": "Wholesale stationery and office supply",
            "companyAddress": "14 Harbour Road, Port Louis",
            "companyPhone": "+230 5123 4567",
            "companyEmail": "accounts@meridian.example",
            "companyLogo": "https://meridian.example/logo.png",
            "invoiceNumber": "INV-2031",
            "invoiceDate": "04/08/2026",
            "dueDate": "18/08/2026",
            "contact": {
                "name": "Ashford Stationers",
                "phone": "+230 5765 4321",
                "email": "orders@ashford.example"
            },
            "billingAddress": "22 Victoria Street, Curepipe",
            "items": [
                {
                    "name": "A4 copy paper",
                    "code": "PPR-A4",
                    "quantity": 20,
                    "unit": "ream",
                    "rate": "240.00",
                    "amount": "4,800.00",
                    "serialNumbers": []
                },
                {
                    "name": "Laser printer",
                    "code": "PRT-LX",
                    "quantity": 1,
                    "unit": "pc",
                    "rate": "9,500.00",
                    "amount": "9,500.00",
                    "serialNumbers": ["LX-88213", "LX-88214"]
                }
            ],
            "subtotal": "14,300.00",
            "discount": "",
            "taxRate": "15%",
            "taxAmount": "2,145.00",
            "total": "16,445.00",
            "amountInWords": "Sixteen thousand four hundred forty-five rupees only",
            "notes": "Goods once sold are not returnable.",
            "terms": "Payment due within 14 days of invoice date."
        }),
        ModuleType::Purchase => json!({
            "companyName": "Meridian Trading Co.",
            "tagline": "Wholesale stationery and office supply",
            "companyAddress": "14 Harbour Road, Port Louis",
            "companyPhone": "+230 5123 4567",
            "companyEmail": "accounts@meridian.example",
            "companyLogo": "https://meridian.example/logo.png",
            "billNumber": "PB-0452",
            "billDate": "02/08/2026",
            "referenceNumber": "CRS-18807",
            "contact": {
                "name": "Crestline Paper Mills",
                "phone": "+230 5987 1100",
                "email": "sales@crestline.example"
            },
            "shippingAddress": "",
            "items": [
                {
                    "name": "A4 copy paper",
                    "code": "PPR-A4",
                    "quantity": 200,
                    "unit": "ream",
                    "rate": "180.00",
                    "amount": "36,000.00"
                },
                {
                    "name": "Kraft envelopes",
                    "code": "ENV-K9",
                    "quantity": 50,
                    "unit": "box",
                    "rate": "95.00",
                    "amount": "4,750.00"
                }
            ],
            "subtotal": "40,750.00",
            "taxRate": "15%",
            "taxAmount": "6,112.50",
            "total": "46,862.50",
            "amountInWords": "Forty-six thousand eight hundred sixty-two rupees and fifty cents only",
            "notes": "",
            "terms": "Goods received subject to quality inspection."
        }),
        ModuleType::Payment => json!({
            "companyName": "Meridian Trading Co.",
            "tagline": "Wholesale stationery and office supply",
            "companyAddress": "14 Harbour Road, Port Louis",
            "companyPhone": "+230 5123 4567",
            "companyEmail": "accounts@meridian.example",
            "companyLogo": "https://meridian.example/logo.png",
            "receiptNumber": "RCT-0178",
            "paymentDate": "05/08/2026",
            "contact": {
                "name": "Ashford Stationers"
            },
            "paymentMode": "Bank transfer",
            "reference": "TRF-99121",
            "amount": "10,000.00",
            "amountInWords": "Ten thousand rupees only",
            "allocations": [
                {
                    "invoiceNumber": "INV-2027",
                    "invoiceDate": "21/07/2026",
                    "invoiceTotal": "6,500.00",
                    "allocated": "6,500.00"
                },
                {
                    "invoiceNumber": "INV-2031",
                    "invoiceDate": "04/08/2026",
                    "invoiceTotal": "16,445.00",
                    "allocated": "3,500.00"
                }
            ],
            "notes": "",
            "terms": "Receipt valid subject to realisation of funds."
        }),
    };
    Payload::from_value(value)
}
