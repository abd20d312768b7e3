//! Handlebars sources for every report prompt.

pub(crate) const MARKET_TRENDS: &str = "\
Analyze the current budget tourism trends in {{country}} for the coming season. Focus on:

1. Top 10 most popular budget destinations for backpackers and budget travelers
2. Peak tourism seasons and months
3. Average budget traveler spending per day
4. Most popular accommodation types (hostels, guesthouses, budget hotels)
5. Transportation preferences of budget travelers
6. Popular activities and attractions for budget tourists
7. Emerging budget tourism hotspots
8. Current challenges in budget accommodation sector

Provide specific data, statistics, and insights. Format as structured data.
";

pub(crate) const MARKET_REPORT: &str = "\
Generate a comprehensive market report for budget accommodation investment in {{country}}:

EXECUTIVE SUMMARY:
- Market size and growth rate
- Key opportunities and threats
- Investment recommendations

MARKET ANALYSIS:
- Tourist arrival statistics (last three years)
- Budget traveler demographics
- Spending patterns
- Seasonal trends

COMPETITIVE LANDSCAPE:
- Major budget accommodation chains
- Independent operators
- Market share distribution
- Pricing strategies

INVESTMENT OPPORTUNITIES:
- Underserved markets
- Emerging destinations
- Investment requirements
- Expected returns

RISK ANALYSIS:
- Political/economic risks
- Tourism seasonality
- Competition risks
- Operational challenges

RECOMMENDATIONS:
- Top 3 investment locations
- Optimal accommodation types
- Pricing strategies
- Marketing approaches

Include specific numbers, statistics, and actionable insights.
";

pub(crate) const LOCATION_POTENTIAL: &str = "\
Analyze {{location}}, {{country}} as a potential location for budget accommodation investment. Provide:

1. Current tourism volume and growth trends
2. Existing budget accommodation supply and occupancy rates
3. Average room rates for budget accommodations
4. Seasonality patterns
5. Key attractions and activities drawing budget tourists
6. Transportation accessibility
7. Local competition analysis
8. Investment potential score (1-10)
9. Estimated ROI timeline
10. Key challenges and opportunities
11. Recommended accommodation type (hostel, guesthouse, budget hotel)
12. Ideal room count and pricing strategy

Be specific with numbers, costs, and market data where available.
";

pub(crate) const LOCATION_COMPARISON: &str = "\
Compare these locations in {{country}} for budget accommodation investment: {{locations}}

Create a comprehensive comparison including:
1. Investment ranking (1st, 2nd, 3rd, etc.)
2. Investment potential score for each (1-10)
3. Pros and cons for each location
4. Initial investment required (estimated)
5. Expected monthly revenue
6. Break-even timeline
7. Risk assessment for each
8. Market saturation level
9. Growth potential
10. Recommended investment strategy for each

Provide a clear recommendation for the best investment opportunity.
";

pub(crate) const COMPETITION_ANALYSIS: &str = "\
Analyze the budget accommodation competition in {{location}}, {{country}}:

1. List of major budget accommodations (hostels, guesthouses, budget hotels)
2. Their room counts and pricing
3. Occupancy rates and booking patterns
4. Customer review analysis
5. Unique selling points of each competitor
6. Market gaps and opportunities
7. Pricing strategies
8. Marketing channels used
9. Service quality assessment
10. Competitive advantages you could leverage

Provide specific names, prices, and actionable competitive intelligence.
";

pub(crate) const INVESTMENT_RECOMMENDATION: &str = "\
Generate a personalized budget accommodation investment recommendation for {{country}}:

INVESTMENT BUDGET: ${{budget}}

PREFERENCES:
{{preferences}}

Provide:
1. Recommended location(s) within budget
2. Optimal accommodation type and size
3. Expected initial investment breakdown
4. Revenue projections (monthly/yearly)
5. ROI timeline and percentage
6. Risk mitigation strategies
7. Step-by-step implementation plan
8. Licensing and legal requirements
9. Operational considerations
10. Marketing and booking strategies
11. Staffing requirements
12. Maintenance and ongoing costs

Make it actionable with specific next steps and timelines.
";
