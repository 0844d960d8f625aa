//! Built-in default templates, used when no stored template is supplied

use super::{ModuleType, Template};

/// The shipped default template for a module. Marked `isDefault` the same
/// way a stored default record would be.
pub fn builtin_template(module_type: ModuleType) -> Template {
    let html_template = match module_type {
        ModuleType::Sales => SALES_INVOICE,
        ModuleType::Purchase => PURCHASE_INVOICE,
        ModuleType::Payment => PAYMENT_RECEIPT,
    };
    Template {
        id: format!("builtin-{}", module_type.name()),
        module_type,
        html_template: html_template.to_string(),
        is_default: true,
    }
}

static SALES_INVOICE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Sales Invoice</title>
<style>
body { font-family: Arial, Helvetica, sans-serif; color: #222; margin: 0; }
.document { padding: 18px; }
.letterhead { display: flex; gap: 12px; border-bottom: 2px solid #444; padding-bottom: 8px; }
.letterhead img.logo { max-height: 64px; }
.letterhead h1 { margin: 0; }
.tagline { color: #666; font-style: italic; margin: 2px 0; }
table { width: 100%; border-collapse: collapse; }
table.lines th, table.lines td { border: 1px solid #999; text-align: left; }
table.totals td { text-align: right; }
table.totals tr.grand td { font-weight: bold; border-top: 1px solid #444; }
.serials { display: block; color: #666; }
.amount-in-words { font-style: italic; }
.signature-section { margin-top: 28px; text-align: right; }
.sign-line { border-top: 1px solid #444; display: inline-block; padding-top: 4px; }
</style>
</head>
<body>
<div class="document">
  <div class="letterhead">
    <img class="logo" src="{{companyLogo}}" alt="Company Logo">
    <div>
      <h1 class="document-title">{{companyName}}</h1>
      <p class="tagline">{{tagline}}</p>
      <p>{{companyAddress}}</p>
      <p>{{companyPhone}} &middot; {{companyEmail}}</p>
    </div>
  </div>
  <h2 class="document-title">Sales Invoice</h2>
  <table class="meta">
    <tr><td>Invoice No.</td><td>{{invoiceNumber}}</td></tr>
    <tr><td>Date</td><td>{{invoiceDate}}</td></tr>
    {{#dueDate}}<tr><td>Due</td><td>{{dueDate}}</td></tr>{{/dueDate}}
  </table>
  <div class="party">
    <h3>Billed To</h3>
    <p>{{contact.name}}</p>
    <p>{{contact.phone}} {{contact.email}}</p>
    {{#billingAddress}}<p>{{billingAddress}}</p>{{/billingAddress}}
    {{^billingAddress}}<p>No billing address on record</p>{{/billingAddress}}
  </div>
  <table class="lines">
    <thead>
      <tr><th>#</th><th>Item</th><th class="item-code">Code</th><th>Qty</th><th>Rate</th><th>Amount</th></tr>
    </thead>
    <tbody>
      {{#items}}<tr>
        <td>{{index}}</td>
        <td>{{name}}<span class="serials">{{serialNumbers}}</span></td>
        <td class="item-code">{{code}}</td>
        <td>{{quantity}} {{unit}}</td>
        <td>{{rate}}</td>
        <td>{{amount}}</td>
      </tr>{{/items}}
    </tbody>
  </table>
  <table class="totals">
    <tr><td>Subtotal</td><td>{{subtotal}}</td></tr>
    {{#discount}}<tr><td>Discount</td><td>{{discount}}</td></tr>{{/discount}}
    <tr class="tax-breakdown"><td>Tax ({{taxRate}})</td><td>{{taxAmount}}</td></tr>
    <tr class="grand"><td>Total</td><td>{{total}}</td></tr>
  </table>
  <p class="amount-in-words">{{amountInWords}}</p>
  {{#notes}}<p class="notes">{{notes}}</p>{{/notes}}
  <div class="terms-section"><h3>Terms</h3><p>{{terms}}</p></div>
  <div class="signature-section"><p>For {{companyName}}</p><p class="sign-line">Authorised Signatory</p></div>
</div>
</body>
</html>
"#;

static PURCHASE_INVOICE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Purchase Invoice</title>
<style>
body { font-family: Arial, Helvetica, sans-serif; color: #222; margin: 0; }
.document { padding: 18px; }
.letterhead { display: flex; gap: 12px; border-bottom: 2px solid #444; padding-bottom: 8px; }
.letterhead img.logo { max-height: 64px; }
.letterhead h1 { margin: 0; }
.tagline { color: #666; font-style: italic; margin: 2px 0; }
table { width: 100%; border-collapse: collapse; }
table.lines th, table.lines td { border: 1px solid #999; text-align: left; }
table.totals td { text-align: right; }
table.totals tr.grand td { font-weight: bold; border-top: 1px solid #444; }
.amount-in-words { font-style: italic; }
.signature-section { margin-top: 28px; text-align: right; }
.sign-line { border-top: 1px solid #444; display: inline-block; padding-top: 4px; }
</style>
</head>
<body>
<div class="document">
  <div class="letterhead">
    <img class="logo" src="{{companyLogo}}" alt="Company Logo">
    <div>
      <h1 class="document-title">{{companyName}}</h1>
      <p class="tagline">{{tagline}}</p>
      <p>{{companyAddress}}</p>
      <p>{{companyPhone}} &middot; {{companyEmail}}</p>
    </div>
  </div>
  <h2 class="document-title">Purchase Invoice</h2>
  <table class="meta">
    <tr><td>Bill No.</td><td>{{billNumber}}</td></tr>
    <tr><td>Date</td><td>{{billDate}}</td></tr>
    {{#referenceNumber}}<tr><td>Supplier Ref.</td><td>{{referenceNumber}}</td></tr>{{/referenceNumber}}
  </table>
  <div class="party">
    <h3>Supplier</h3>
    <p>{{contact.name}}</p>
    <p>{{contact.phone}} {{contact.email}}</p>
    {{#shippingAddress}}<p>Deliver to: {{shippingAddress}}</p>{{/shippingAddress}}
    {{^shippingAddress}}<p>Deliver to registered address</p>{{/shippingAddress}}
  </div>
  <table class="lines">
    <thead>
      <tr><th>#</th><th>Item</th><th class="item-code">Code</th><th>Qty</th><th>Rate</th><th>Amount</th></tr>
    </thead>
    <tbody>
      {{#items}}<tr>
        <td>{{index}}</td>
        <td>{{name}}</td>
        <td class="item-code">{{code}}</td>
        <td>{{quantity}} {{unit}}</td>
        <td>{{rate}}</td>
        <td>{{amount}}</td>
      </tr>{{/items}}
    </tbody>
  </table>
  <table class="totals">
    <tr><td>Subtotal</td><td>{{subtotal}}</td></tr>
    <tr class="tax-breakdown"><td>Tax ({{taxRate}})</td><td>{{taxAmount}}</td></tr>
    <tr class="grand"><td>Total</td><td>{{total}}</td></tr>
  </table>
  <p class="amount-in-words">{{amountInWords}}</p>
  {{#notes}}<p class="notes">{{notes}}</p>{{/notes}}
  <div class="terms-section"><h3>Terms</h3><p>{{terms}}</p></div>
  <div class="signature-section"><p>For {{companyName}}</p><p class="sign-line">Authorised Signatory</p></div>
</div>
</body>
</html>
"#;

static PAYMENT_RECEIPT: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Payment Receipt</title>
<style>
body { font-family: Arial, Helvetica, sans-serif; color: #222; margin: 0; }
.document { padding: 18px; }
.letterhead { display: flex; gap: 12px; border-bottom: 2px solid #444; padding-bottom: 8px; }
.letterhead img.logo { max-height: 64px; }
.letterhead h1 { margin: 0; }
.tagline { color: #666; font-style: italic; margin: 2px 0; }
table { width: 100%; border-collapse: collapse; }
table.allocations th, table.allocations td { border: 1px solid #999; text-align: left; }
.unallocated { color: #666; font-style: italic; }
.amount-in-words { font-style: italic; }
.signature-section { margin-top: 28px; text-align: right; }
.sign-line { border-top: 1px solid #444; display: inline-block; padding-top: 4px; }
</style>
</head>
<body>
<div class="document">
  <div class="letterhead">
    <img class="logo" src="{{companyLogo}}" alt="Company Logo">
    <div>
      <h1 class="document-title">{{companyName}}</h1>
      <p class="tagline">{{tagline}}</p>
      <p>{{companyAddress}}</p>
      <p>{{companyPhone}} &middot; {{companyEmail}}</p>
    </div>
  </div>
  <h2 class="document-title">Payment Receipt</h2>
  <table class="meta">
    <tr><td>Receipt No.</td><td>{{receiptNumber}}</td></tr>
    <tr><td>Date</td><td>{{paymentDate}}</td></tr>
    <tr><td>Received From</td><td>{{contact.name}}</td></tr>
    <tr><td>Mode</td><td>{{paymentMode}}</td></tr>
    {{#reference}}<tr><td>Reference</td><td>{{reference}}</td></tr>{{/reference}}
    <tr><td>Amount</td><td>{{amount}}</td></tr>
  </table>
  <p class="amount-in-words">{{amountInWords}}</p>
  <h3>Allocated Against</h3>
  <table class="allocations">
    <thead>
      <tr><th>#</th><th>Invoice</th><th>Date</th><th>Invoice Total</th><th>Allocated</th></tr>
    </thead>
    <tbody>
      {{#allocations}}<tr>
        <td>{{index}}</td>
        <td>{{invoiceNumber}}</td>
        <td>{{invoiceDate}}</td>
        <td>{{invoiceTotal}}</td>
        <td>{{allocated}}</td>
      </tr>{{/allocations}}
      {{^allocations}}<tr><td colspan="5" class="unallocated">Payment not yet allocated to any invoice</td></tr>{{/allocations}}
    </tbody>
  </table>
  {{#notes}}<p class="notes">{{notes}}</p>{{/notes}}
  <div class="terms-section"><h3>Terms</h3><p>{{terms}}</p></div>
  <div class="signature-section"><p>For {{companyName}}</p><p class="sign-line">Authorised Signatory</p></div>
</div>
</body>
</html>
"#;
