//! Services, clients, pricing and testimonials pages.

use super::{count, OrFail, SiteWorld};
use cucumber::{then, when};
use showcase_browser_test::{site, Selector};

/// Widest a client logo may render on a phone.
const MOBILE_LOGO_MAX: f64 = 400.0;

#[then(regex = r"^service cards should be (?:visible|displayed)$")]
async fn service_cards(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().service_cards_at_least(1))
        .await
        .or_fail();
}

#[then(regex = r"^each (?:service )?card should have a (?:title|service name)$")]
async fn service_card_titles(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().service_cards_have_titles())
        .await
        .or_fail();
}

#[then(regex = r"^each (?:service )?card should have (?:a description|service details)$")]
async fn service_card_descriptions(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().service_cards_have_descriptions())
        .await
        .or_fail();
}

#[then("each card should have an icon")]
async fn service_card_icons(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().service_cards_have_icons())
        .await
        .or_fail();
}

#[then("service cards should stack vertically")]
async fn service_cards_layout(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().service_cards_in_layout())
        .await
        .or_fail();
}

#[then("the page should display section heading")]
async fn section_heading(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().section_heading_visible())
        .await
        .or_fail();
}

#[then("client logos should be displayed")]
async fn client_logos(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().client_logos_at_least(1))
        .await
        .or_fail();
}

#[then(regex = r"^(?:pricing plans should be listed|pricing plan cards should be displayed|cards should stack vertically on mobile)$")]
async fn pricing_plans(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().pricing_plans_at_least(1))
        .await
        .or_fail();
}

#[then(regex = r"^at least (\w+) pricing plans? should be shown$")]
async fn pricing_plans_at_least(world: &mut SiteWorld, min: String) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().pricing_plans_at_least(count(&min)))
        .await
        .or_fail();
}

#[when("I view a pricing plan card")]
async fn view_pricing_plan(world: &mut SiteWorld) {
    let ctx = world.ctx();
    let plan = Selector::css(site::PRICING_PLAN);
    ctx.within(ctx.scroll_into_view(&plan)).await.or_fail();
}

#[then("it should display the plan name")]
async fn plan_name(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().pricing_plans_have_names())
        .await
        .or_fail();
}

#[then("it should display the price")]
async fn plan_price(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().pricing_plans_have_prices())
        .await
        .or_fail();
}

#[then("it should display plan features")]
async fn plan_features(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().pricing_plans_have_features())
        .await
        .or_fail();
}

#[then("it should have a call-to-action button")]
async fn plan_cta(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().pricing_plans_have_cta())
        .await
        .or_fail();
}

#[then("pricing plans should be properly aligned")]
async fn pricing_layout(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().pricing_plans_in_layout())
        .await
        .or_fail();
}

#[then(regex = r"^(?:testimonial cards should be visible|testimonial cards should stack vertically)$")]
async fn testimonials(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().testimonials_at_least(1))
        .await
        .or_fail();
}

#[then(regex = r"^at least (\w+) testimonials? should be visible$")]
async fn testimonials_at_least(world: &mut SiteWorld, min: String) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().testimonials_at_least(count(&min)))
        .await
        .or_fail();
}

#[then("testimonials should be properly formatted")]
async fn testimonial_visible(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().testimonial_visible()).await.or_fail();
}

#[then(regex = r"^(?:the page should display a testimonial section|testimonial section should be visible)$")]
async fn testimonial_section(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().testimonial_section_visible())
        .await
        .or_fail();
}

#[then("the testimonial should contain customer quote")]
async fn customer_quote(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().customer_quote_present()).await.or_fail();
}

#[then("the testimonial should display customer information")]
async fn customer_info(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().customer_info_visible()).await.or_fail();
}

#[then("there should be descriptive content about services")]
async fn services_text(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().services_text_present()).await.or_fail();
}

#[then(regex = r"^(?:the page should have a video link|video content should be accessible)$")]
async fn video_link(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().video_link_visible()).await.or_fail();
}

#[then("the video link should have an icon")]
async fn video_icon(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().video_link_has_icon()).await.or_fail();
}

#[then("clicking the video link should open video player")]
async fn video_target(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().video_link_has_target()).await.or_fail();
}

#[then(regex = r"^(?:the page should display service-related image|images should be properly aligned)$")]
async fn service_image(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().service_image_visible()).await.or_fail();
}

#[then("the image should be properly loaded")]
async fn service_image_source(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().service_image_has_source())
        .await
        .or_fail();
}

#[then("the image should be responsive")]
async fn service_image_width(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().service_image_sized()).await.or_fail();
}

#[then("services content should be visible")]
async fn services_content(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().first_section_visible()).await.or_fail();
}

#[then("layout should display in multi-column format")]
async fn services_columns(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().sections_in_columns()).await.or_fail();
}

#[then("page should be fully interactive")]
async fn services_interactive(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().content_readable()).await.or_fail();
}

#[then("company logos should be displayed")]
async fn company_logos(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().client_logos_at_least(1))
        .await
        .or_fail();
}

#[when("I view the clients section")]
async fn view_clients(world: &mut SiteWorld) {
    let ctx = world.ctx();
    let clients = Selector::css(site::CLIENT_BLOCK);
    ctx.within(ctx.scroll_into_view(&clients)).await.or_fail();
}

#[then("client logos should be grouped in blocks")]
async fn client_blocks(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().client_blocks_at_least(1))
        .await
        .or_fail();
}

#[then("each block should have a company name")]
async fn client_block_names(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().client_blocks_named()).await.or_fail();
}

#[then(regex = r"^at least (\w+) client compan(?:y|ies) should be displayed$")]
async fn companies_at_least(world: &mut SiteWorld, min: String) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().companies_at_least(count(&min)))
        .await
        .or_fail();
}

#[then("each client should have proper formatting")]
async fn client_formatting(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().client_block_visible()).await.or_fail();
}

#[then("client logos should be responsive")]
async fn client_logo_width(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().client_logos_sized(None))
        .await
        .or_fail();
}

#[then("logos should scale appropriately on mobile")]
async fn client_logo_mobile_width(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().client_logos_sized(Some(MOBILE_LOGO_MAX)))
        .await
        .or_fail();
}

#[then("testimonial cards should be displayed")]
async fn testimonial_cards(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().testimonials_at_least(1))
        .await
        .or_fail();
}

#[then("each testimonial should have content")]
async fn testimonial_content(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().testimonials_have_content())
        .await
        .or_fail();
}

#[when("I view a testimonial card")]
async fn view_testimonial(world: &mut SiteWorld) {
    let ctx = world.ctx();
    let card = Selector::css(site::TESTIMONIAL);
    ctx.within(ctx.scroll_into_view(&card)).await.or_fail();
}

#[then("it should display the client name")]
async fn testimonial_name(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().testimonial_client_name_visible())
        .await
        .or_fail();
}

#[then("it should display the client position")]
async fn testimonial_position(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().testimonial_position_visible())
        .await
        .or_fail();
}

#[then("it should display the testimonial text")]
async fn testimonial_text(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().testimonial_text_visible())
        .await
        .or_fail();
}

#[then("it should display a user image or avatar")]
async fn testimonial_avatar(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().testimonial_avatar_visible())
        .await
        .or_fail();
}

#[then("pricing plans should be clearly differentiated")]
async fn pricing_distinct(world: &mut SiteWorld) {
    let ctx = world.ctx();
    ctx.within(ctx.checks().pricing_plan_visible()).await.or_fail();
}
